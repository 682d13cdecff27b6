//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use consumables_domain::event::ItemEvent;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped). Slow subscribers that fall more than
/// `capacity` events behind observe a `Lagged` error and skip ahead.
pub struct InProcessEventBus {
    sender: broadcast::Sender<ItemEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ItemEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: ItemEvent) {
        // send fails only when there are zero receivers, which is fine.
        if self.sender.send(event).is_err() {
            tracing::trace!("item event dropped, no subscribers");
        }
    }
}
