//! # consumables-domain
//!
//! Pure domain model for the consumable notes list.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Items** (a named consumable with notes and an optional quantity)
//! - Define **Quantities** (strictly positive counts; zero means "gone")
//! - Define the **ItemList** (insertion-ordered, id-unique sequence of items)
//!   and the quantity adjustment rule that removes depleted items
//! - Define **ItemEvents** (change records the presentation layer reacts to)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or from the presentation layer.

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod item;
pub mod item_list;
pub mod quantity;
pub mod tracking;
