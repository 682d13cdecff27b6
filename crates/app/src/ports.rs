//! Port definitions — traits that the outside world implements.
//!
//! Ports live here (in `app`) so that both the use-case layer and the
//! presentation layer can depend on them without circular dependencies.

pub mod event_bus;

pub use event_bus::EventPublisher;
