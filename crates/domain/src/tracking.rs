//! Tracking mode — whether a list counts units or only keeps notes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a list treats item quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Every item carries a [`Quantity`](crate::quantity::Quantity) that can
    /// be incremented and decremented; depleted items leave the list.
    #[default]
    Quantity,
    /// Items carry a name and notes only.
    #[serde(alias = "notes-only")]
    Notes,
}

impl TrackingMode {
    /// Whether items added under this mode carry a quantity.
    #[must_use]
    pub fn tracks_quantity(self) -> bool {
        matches!(self, Self::Quantity)
    }
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantity => f.write_str("quantity"),
            Self::Notes => f.write_str("notes"),
        }
    }
}

/// Returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tracking mode `{0}` (expected `quantity` or `notes`)")]
pub struct UnknownTrackingMode(pub String);

impl FromStr for TrackingMode {
    type Err = UnknownTrackingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantity" => Ok(Self::Quantity),
            "notes" | "notes-only" => Ok(Self::Notes),
            other => Err(UnknownTrackingMode(other.to_string())),
        }
    }
}
