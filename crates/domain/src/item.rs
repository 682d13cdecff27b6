//! Item — a single consumable recorded in the list.

use serde::Serialize;

use crate::error::ValidationError;
use crate::id::ItemId;
use crate::quantity::Quantity;
use crate::time::{self, Timestamp};

/// A named consumable with free-text notes and, when the list tracks
/// quantities, a positive unit count.
///
/// Items are immutable values: the only change ever made to one is a new
/// quantity, which produces a fresh `Item` through [`Item::with_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<Quantity>,
    created_at: Timestamp,
}

impl Item {
    /// Create a builder for an item with the given identifier.
    #[must_use]
    pub fn builder(id: ItemId) -> ItemBuilder {
        ItemBuilder {
            id,
            name: String::new(),
            notes: String::new(),
            quantity: None,
            created_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Unit count, or `None` for an item on a notes-only list.
    #[must_use]
    pub fn quantity(&self) -> Option<Quantity> {
        self.quantity
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Build a copy of this item carrying `quantity`; every other field is kept.
    #[must_use]
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity: Some(quantity),
            ..self.clone()
        }
    }
}

/// Step-by-step builder for [`Item`].
#[derive(Debug)]
pub struct ItemBuilder {
    id: ItemId,
    name: String,
    notes: String,
    quantity: Option<Quantity>,
    created_at: Option<Timestamp>,
}

impl ItemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, trim the name, and return an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if the trimmed name is empty.
    pub fn build(self) -> Result<Item, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Item {
            id: self.id,
            name: name.to_string(),
            notes: self.notes,
            quantity: self.quantity,
            created_at: self.created_at.unwrap_or_else(time::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ItemId {
        ItemId::from_raw(1)
    }

    #[test]
    fn should_build_valid_item_when_name_provided() {
        let item = Item::builder(id())
            .name("Paper Towels")
            .notes("buy more")
            .quantity(Quantity::coerce(3))
            .build()
            .unwrap();

        assert_eq!(item.id(), id());
        assert_eq!(item.name(), "Paper Towels");
        assert_eq!(item.notes(), "buy more");
        assert_eq!(item.quantity(), Some(Quantity::coerce(3)));
    }

    #[test]
    fn should_trim_name() {
        let item = Item::builder(id()).name("  Soap \n").build().unwrap();
        assert_eq!(item.name(), "Soap");
    }

    #[test]
    fn should_keep_notes_verbatim() {
        let item = Item::builder(id())
            .name("Soap")
            .notes("  lavender, not lemon ")
            .build()
            .unwrap();
        assert_eq!(item.notes(), "  lavender, not lemon ");
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = Item::builder(id()).notes("orphan notes").build();
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn should_return_validation_error_when_name_is_whitespace() {
        let result = Item::builder(id()).name(" \t ").build();
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn should_leave_quantity_absent_when_not_set() {
        let item = Item::builder(id()).name("Tea").build().unwrap();
        assert!(item.quantity().is_none());
    }

    #[test]
    fn should_only_change_quantity_when_building_updated_copy() {
        let created_at = "2024-03-01T09:30:00Z".parse::<Timestamp>().unwrap();
        let item = Item::builder(id())
            .name("Tea")
            .notes("green")
            .quantity(Quantity::ONE)
            .created_at(created_at)
            .build()
            .unwrap();

        let updated = item.with_quantity(Quantity::coerce(5));

        assert_eq!(updated.quantity(), Some(Quantity::coerce(5)));
        assert_eq!(updated.id(), item.id());
        assert_eq!(updated.name(), item.name());
        assert_eq!(updated.notes(), item.notes());
        assert_eq!(updated.created_at(), created_at);
        assert_eq!(item.quantity(), Some(Quantity::ONE));
    }

    #[test]
    fn should_stamp_creation_time_when_not_set() {
        let before = time::now();
        let item = Item::builder(id()).name("Tea").build().unwrap();
        assert!(item.created_at() >= before && item.created_at() <= time::now());
    }

    #[test]
    fn should_serialize_pinned_creation_time() {
        let created_at = "2024-03-01T09:30:00Z".parse::<Timestamp>().unwrap();
        let item = Item::builder(id())
            .name("Tea")
            .created_at(created_at)
            .build()
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["created_at"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn should_omit_quantity_from_json_when_absent() {
        let item = Item::builder(id()).name("Tea").build().unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Tea");
        assert!(json.get("quantity").is_none());
    }

    #[test]
    fn should_include_quantity_in_json_when_present() {
        let item = Item::builder(id())
            .name("Tea")
            .quantity(Quantity::coerce(2))
            .build()
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 2);
    }
}
