//! # consumable-notes
//!
//! Terminal presentation layer for the consumable list.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Turn input lines into [`command::Command`]s
//! - Call into the item store and render its snapshot after each change
//! - Report change notifications received from the event bus
//!
//! ## Dependency rule
//! No list logic belongs here. Everything that changes the list goes through
//! `consumables_app::services::item_store::ItemStore`.

pub mod command;
pub mod config;
pub mod render;
pub mod repl;
