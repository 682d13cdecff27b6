//! # consumables-app
//!
//! Application layer — the item store use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the outside world plugs into:
//!   - `EventPublisher` — receives a change record after every mutation
//! - Define the **driving port** as a use-case struct:
//!   - `ItemStore` — add, remove, adjust quantity, snapshot
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Own the session state: one store per session, empty at start
//!
//! ## Dependency rule
//! Depends on `consumables-domain` only (plus `tokio::sync` for channels).
//! Never imports presentation code. Front ends depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
