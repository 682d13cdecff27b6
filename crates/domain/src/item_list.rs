//! Item list — the ordered collection of consumables and its mutation rules.

use serde::Serialize;

use crate::id::ItemId;
use crate::item::Item;
use crate::quantity::Quantity;

/// Result of [`ItemList::adjust_quantity`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOutcome {
    /// The quantity dropped to zero or below and the item left the list.
    Removed,
    /// The item now carries the given quantity.
    Updated(Quantity),
    /// No item with that id is in the list.
    NotFound,
    /// The item has no quantity (notes-only list); nothing changed.
    Untracked,
}

/// Insertion-ordered sequence of items with unique ids.
///
/// Newest items are appended at the end. Removals keep the relative order of
/// the remaining items, and no item with a zero quantity is ever held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end of the list.
    ///
    /// Callers mint ids from an [`IdSequence`](crate::id::IdSequence), which
    /// never repeats, so the id cannot already be present.
    pub fn push(&mut self, item: Item) {
        debug_assert!(self.get(item.id()).is_none(), "duplicate item id {}", item.id());
        self.items.push(item);
    }

    /// Remove the item with `id`, returning it if it was present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Apply a signed delta to an item's quantity.
    ///
    /// A result of zero or less removes the item. Otherwise the item is
    /// replaced in place by a copy carrying the new quantity.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: i64) -> AdjustOutcome {
        let Some(index) = self.position(id) else {
            return AdjustOutcome::NotFound;
        };
        let Some(current) = self.items[index].quantity() else {
            return AdjustOutcome::Untracked;
        };
        match current.adjust(delta) {
            Some(next) => {
                self.items[index] = self.items[index].with_quantity(next);
                AdjustOutcome::Updated(next)
            }
            None => {
                self.items.remove(index);
                AdjustOutcome::Removed
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Owned copy of the items in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
