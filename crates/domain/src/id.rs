//! Item identifiers and the sequence that hands them out.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`Item`](crate::item::Item).
///
/// Identifiers are only ever minted by an [`IdSequence`], so two items added
/// to the same list can never share one, even when added within the same
/// clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Access the raw identifier value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Monotonic source of [`ItemId`]s.
///
/// Starts at 1 and only moves forward, so an id is never handed out twice,
/// including ids of items that have since been removed.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Create a sequence whose first id is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next identifier.
    pub fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId(self.last)
    }
}
