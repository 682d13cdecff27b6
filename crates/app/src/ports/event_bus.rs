//! Event publishing port.

use consumables_domain::event::ItemEvent;

/// Receives an [`ItemEvent`] after each successful mutation.
///
/// Publishing is synchronous and infallible: a store operation never fails
/// because nobody is listening. The store has released its lock by the time
/// `publish` runs, so implementations may read the store.
pub trait EventPublisher {
    /// Hand over a change record.
    fn publish(&self, event: ItemEvent);
}
