//! Test Fixtures
//!
//! Sample ranges, cards, and positions.

use std::sync::Arc;

use crate::core::atlas::{Characteristic, Position};
use crate::core::cards::{Card, CardDraft, CharacteristicRange};

/// A validated card whose ranges are parsed from `description`.
pub fn card_from_description(name: &str, description: &str) -> Arc<Card> {
    Arc::new(
        CardDraft::from_description(name, description)
            .validate()
            .expect("fixture card should validate"),
    )
}

/// A card with one range per characteristic, all spanning `1..8`.
pub fn full_card() -> Card {
    let mut draft = CardDraft::new("Full");
    draft.ranges = Characteristic::ALL
        .into_iter()
        .map(CharacteristicRange::default_for)
        .collect();
    draft.validate().expect("fixture card should validate")
}

pub fn pos(x: i8, y: i8) -> Position {
    Position::new(x, y).expect("fixture position should be legal")
}
