//! Item events — records of changes made to the list.
//!
//! Events are produced only by mutations that changed something. Rejected
//! additions and operations on unknown ids produce none.

use serde::Serialize;

use crate::id::ItemId;
use crate::item::Item;
use crate::quantity::Quantity;

/// Why an item left the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Explicitly deleted.
    Deleted,
    /// Its quantity was decremented to zero or below.
    Depleted,
}

/// A change to the item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEvent {
    Added {
        item: Item,
    },
    Removed {
        id: ItemId,
        name: String,
        reason: RemovalReason,
    },
    QuantityChanged {
        id: ItemId,
        from: Quantity,
        to: Quantity,
    },
}

impl ItemEvent {
    /// Identifier of the item this event concerns.
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Added { item } => item.id(),
            Self::Removed { id, .. } | Self::QuantityChanged { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_item_id_for_every_variant() {
        let id = ItemId::from_raw(3);
        let item = Item::builder(id).name("Tea").build().unwrap();

        let events = [
            ItemEvent::Added { item },
            ItemEvent::Removed {
                id,
                name: "Tea".to_string(),
                reason: RemovalReason::Deleted,
            },
            ItemEvent::QuantityChanged {
                id,
                from: Quantity::ONE,
                to: Quantity::coerce(2),
            },
        ];

        for event in events {
            assert_eq!(event.item_id(), id);
        }
    }

    #[test]
    fn should_serialize_with_type_tag() {
        let event = ItemEvent::Removed {
            id: ItemId::from_raw(5),
            name: "Soap".to_string(),
            reason: RemovalReason::Depleted,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "removed");
        assert_eq!(json["id"], 5);
        assert_eq!(json["reason"], "depleted");
    }
}
