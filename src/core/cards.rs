//! Card records and card validation.
//!
//! A [`Card`] owns an ordered list of [`CharacteristicRange`]s. The order
//! matters: computed values are keyed by range index, so reordering ranges
//! after a card has been placed invalidates the keys of that placement.
//!
//! Validation lives here rather than in the mapping engine. The engine
//! assumes it receives well-formed cards; [`CardDraft::validate`] is the
//! single gate that turns user input into one.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::core::atlas::tags::{describe_ranges, parse_ranges};
use crate::core::atlas::Characteristic;

/// Default bounds for a freshly added range.
pub const DEFAULT_MIN: f64 = 1.0;
pub const DEFAULT_MAX: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CardError {
    #[error("card name must not be empty")]
    EmptyName,

    #[error("card needs at least one characteristic range")]
    NoRanges,

    #[error("range {index} ({characteristic}) has a non-finite bound")]
    NonFiniteBound {
        index: usize,
        characteristic: Characteristic,
    },
}

/// A numeric range for one characteristic.
///
/// `min_value` may be larger than `max_value`; interpolation then descends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicRange {
    pub id: String,
    pub characteristic: Characteristic,
    pub min_value: f64,
    pub max_value: f64,
}

impl CharacteristicRange {
    pub fn new(characteristic: Characteristic, min_value: f64, max_value: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            characteristic,
            min_value,
            max_value,
        }
    }

    pub fn default_for(characteristic: Characteristic) -> Self {
        Self::new(characteristic, DEFAULT_MIN, DEFAULT_MAX)
    }

    /// Same characteristic and bounds, ignoring the id.
    pub fn same_bounds(&self, other: &CharacteristicRange) -> bool {
        self.characteristic == other.characteristic
            && self.min_value == other.min_value
            && self.max_value == other.max_value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ranges: Vec<CharacteristicRange>,
}

/// Unvalidated card input, as collected from a form.
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    /// Set when editing an existing card.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub ranges: Vec<CharacteristicRange>,
}

impl CardDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a draft whose ranges are read from the tags in `description`.
    pub fn from_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        let ranges = parse_ranges(&description);
        Self {
            id: None,
            name: name.into(),
            description,
            ranges,
        }
    }

    /// Start an edit of an existing card.
    pub fn edit(card: &Card) -> Self {
        Self {
            id: Some(card.id.clone()),
            name: card.name.clone(),
            description: card.description.clone(),
            ranges: card.ranges.clone(),
        }
    }

    pub fn with_range(mut self, range: CharacteristicRange) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn validate(self) -> Result<Card, CardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CardError::EmptyName);
        }
        if self.ranges.is_empty() {
            return Err(CardError::NoRanges);
        }
        if let Some((index, range)) = self
            .ranges
            .iter()
            .enumerate()
            .find(|(_, r)| !r.min_value.is_finite() || !r.max_value.is_finite())
        {
            return Err(CardError::NonFiniteBound {
                index,
                characteristic: range.characteristic,
            });
        }

        let description = if self.description.trim().is_empty() {
            describe_ranges(&self.ranges)
        } else {
            self.description
        };

        Ok(Card {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: name.to_string(),
            description,
            ranges: self.ranges,
        })
    }
}
