//! Item store — the session-scoped list of consumables and the only way to change it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use consumables_domain::error::ValidationError;
use consumables_domain::event::{ItemEvent, RemovalReason};
use consumables_domain::id::{IdSequence, ItemId};
use consumables_domain::item::Item;
use consumables_domain::item_list::{AdjustOutcome, ItemList};
use consumables_domain::quantity::Quantity;
use consumables_domain::tracking::TrackingMode;

use crate::ports::EventPublisher;

#[derive(Debug, Default)]
struct State {
    ids: IdSequence,
    items: ItemList,
}

/// Application service holding the authoritative item list for one session.
///
/// Every operation runs to completion on the calling thread. The list sits
/// behind a mutex so that, when the store is shared, mutations are
/// serialized and no reader observes a half-applied change. Events are
/// published after the lock is released, so a publisher may read the store.
pub struct ItemStore<P> {
    mode: TrackingMode,
    state: Mutex<State>,
    publisher: P,
}

impl<P: EventPublisher> ItemStore<P> {
    /// Create an empty store.
    pub fn new(mode: TrackingMode, publisher: P) -> Self {
        Self {
            mode,
            state: Mutex::new(State::default()),
            publisher,
        }
    }

    /// Append a new item and return its id.
    ///
    /// The name is trimmed. On a quantity-tracking store the item starts at
    /// `quantity` (default 1, non-positive values become 1); on a notes-only
    /// store `quantity` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when the trimmed name is empty;
    /// the list is left untouched.
    pub fn add(
        &self,
        name: &str,
        notes: &str,
        quantity: Option<i64>,
    ) -> Result<ItemId, ValidationError> {
        let item = {
            let mut state = self.lock();
            let mut builder = Item::builder(state.ids.next_id()).name(name).notes(notes);
            if self.mode.tracks_quantity() {
                builder = builder.quantity(quantity.map_or(Quantity::ONE, Quantity::coerce));
            }
            let item = builder.build().inspect_err(|err| {
                tracing::debug!(error = %err, "item rejected");
            })?;
            state.items.push(item.clone());
            item
        };

        let id = item.id();
        tracing::debug!(item_id = %id, name = item.name(), quantity = ?item.quantity(), "item added");
        self.publisher.publish(ItemEvent::Added { item });
        Ok(id)
    }

    /// Remove an item. Returns `false` when no item has `id`.
    pub fn remove(&self, id: ItemId) -> bool {
        let removed = self.lock().items.remove(id);
        let Some(item) = removed else {
            tracing::debug!(item_id = %id, "remove ignored, no such item");
            return false;
        };
        tracing::debug!(item_id = %id, name = item.name(), "item removed");
        self.publish_removed(item, RemovalReason::Deleted);
        true
    }

    /// Change an item's quantity by `delta`.
    ///
    /// An item whose quantity would reach zero or below is removed.
    pub fn adjust_quantity(&self, id: ItemId, delta: i64) -> AdjustOutcome {
        let (before, outcome) = {
            let mut state = self.lock();
            let Some(before) = state.items.get(id).cloned() else {
                tracing::debug!(item_id = %id, delta, "adjust ignored, no such item");
                return AdjustOutcome::NotFound;
            };
            let outcome = state.items.adjust_quantity(id, delta);
            (before, outcome)
        };

        match outcome {
            AdjustOutcome::Updated(to) => {
                tracing::debug!(item_id = %id, delta, quantity = %to, "quantity updated");
                if let Some(from) = before.quantity() {
                    self.publisher
                        .publish(ItemEvent::QuantityChanged { id, from, to });
                }
            }
            AdjustOutcome::Removed => {
                tracing::debug!(item_id = %id, delta, name = before.name(), "item depleted");
                self.publish_removed(before, RemovalReason::Depleted);
            }
            AdjustOutcome::Untracked => {
                tracing::debug!(item_id = %id, delta, "adjust ignored, quantity not tracked");
            }
            AdjustOutcome::NotFound => {}
        }
        outcome
    }

    /// Add one unit.
    pub fn increment(&self, id: ItemId) -> AdjustOutcome {
        self.adjust_quantity(id, 1)
    }

    /// Take away one unit, removing the item at zero.
    pub fn decrement(&self, id: ItemId) -> AdjustOutcome {
        self.adjust_quantity(id, -1)
    }

    /// Owned copy of the current items in insertion order.
    ///
    /// Changing the returned vector has no effect on the store.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Item> {
        self.lock().items.to_vec()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.lock().items.get(id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// The publisher this store reports changes to.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    fn publish_removed(&self, item: Item, reason: RemovalReason) {
        self.publisher.publish(ItemEvent::Removed {
            id: item.id(),
            name: item.name().to_string(),
            reason,
        });
    }

    // The list is never left half-modified, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
