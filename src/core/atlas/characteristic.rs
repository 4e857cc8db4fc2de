//! Card characteristics and their fixed label table.
//!
//! The label table is shared by tag formatting and tag parsing, so a label
//! rendered by [`Characteristic::label`] is always recognised again by
//! [`Characteristic::from_label`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid axis read by a characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One of the four characteristics a card range can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Characteristic {
    /// Read from x, grows left to right.
    Quality,
    /// Read from x, grows right to left.
    Quantity,
    /// Read from y, grows with y.
    Cost,
    /// Read from y, grows as y decreases.
    Power,
}

impl Characteristic {
    pub const ALL: [Characteristic; 4] = [
        Characteristic::Quality,
        Characteristic::Quantity,
        Characteristic::Cost,
        Characteristic::Power,
    ];

    /// Human-readable label used inside description tags.
    pub fn label(self) -> &'static str {
        match self {
            Characteristic::Quality => "Качество",
            Characteristic::Quantity => "Количество",
            Characteristic::Cost => "Стоимость",
            Characteristic::Power => "Сила",
        }
    }

    /// Inverse of [`label`](Self::label). Exact match only.
    pub fn from_label(label: &str) -> Option<Characteristic> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Lowercase tag used in value keys and the persisted format.
    pub fn as_str(self) -> &'static str {
        match self {
            Characteristic::Quality => "quality",
            Characteristic::Quantity => "quantity",
            Characteristic::Cost => "cost",
            Characteristic::Power => "power",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Characteristic::Quality | Characteristic::Quantity => Axis::X,
            Characteristic::Cost | Characteristic::Power => Axis::Y,
        }
    }

    /// Whether a larger coordinate yields a larger axis index.
    pub fn ascending(self) -> bool {
        matches!(self, Characteristic::Quality | Characteristic::Cost)
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
