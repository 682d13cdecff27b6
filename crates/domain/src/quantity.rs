//! Quantity — a strictly positive item count.
//!
//! A zero count is not representable: an item whose count would drop to
//! zero or below leaves the list instead.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of units of a consumable still on hand. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// The default quantity of a newly added item.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Wrap a count, returning `None` for zero.
    #[must_use]
    pub fn new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Self)
    }

    /// Turn a caller-supplied initial quantity into a valid one.
    ///
    /// Non-positive requests become [`Quantity::ONE`]; requests beyond
    /// `u32::MAX` saturate.
    #[must_use]
    pub fn coerce(requested: i64) -> Self {
        if requested <= 0 {
            return Self::ONE;
        }
        Self::saturating(requested)
    }

    /// Apply a signed delta.
    ///
    /// Returns `None` when the result is zero or negative, meaning the item
    /// is depleted and must be removed.
    #[must_use]
    pub fn adjust(self, delta: i64) -> Option<Self> {
        let next = i64::from(self.get()).saturating_add(delta);
        (next > 0).then(|| Self::saturating(next))
    }

    /// The count as a plain integer.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    fn saturating(positive: i64) -> Self {
        let count = u32::try_from(positive).unwrap_or(u32::MAX);
        Self::new(count).unwrap_or(Self::ONE)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count).ok_or(ValidationError::ZeroQuantity)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
