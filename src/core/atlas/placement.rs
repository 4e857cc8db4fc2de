//! Cards placed on the atlas for the current session.
//!
//! Placements are never persisted. Every placement is computed from scratch
//! through the mapper; there is no incremental update.

use std::collections::HashMap;
use std::sync::Arc;

use super::mapper::{compute_values, CalculatedValues};
use super::position::Position;
use super::tags::{substitute, unresolved_tags};
use crate::core::cards::Card;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCard {
    pub card: Arc<Card>,
    pub position: Position,
    pub calculated_values: CalculatedValues,
    pub calculated_description: String,
}

impl PlacedCard {
    pub fn compute(card: Arc<Card>, position: Position) -> Self {
        let calculated_values = compute_values(&card.ranges, position);
        let calculated_description =
            substitute(&card.description, &card.ranges, &calculated_values);

        let leftover = unresolved_tags(&calculated_description);
        if !leftover.is_empty() {
            log::warn!(
                "Card '{}' at {position}: {} tag(s) left unsubstituted: {}",
                card.name,
                leftover.len(),
                leftover.join(", ")
            );
        }

        Self {
            card,
            position,
            calculated_values,
            calculated_description,
        }
    }
}

/// The 8x8 board. At most one card per cell.
#[derive(Debug, Default)]
pub struct Atlas {
    cells: HashMap<Position, PlacedCard>,
    /// Positions in placement order, for stable listing.
    order: Vec<Position>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `card` at `position`, returning the card it replaced.
    pub fn place(&mut self, card: Arc<Card>, position: Position) -> Option<PlacedCard> {
        let placed = PlacedCard::compute(card, position);
        log::debug!("Placing '{}' at {position}", placed.card.name);

        let replaced = self.remove(position);
        self.cells.insert(position, placed);
        self.order.push(position);
        replaced
    }

    pub fn remove(&mut self, position: Position) -> Option<PlacedCard> {
        let removed = self.cells.remove(&position)?;
        self.order.retain(|p| *p != position);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.order.clear();
    }

    /// Drop every placement of the card with `card_id`. Returns how many.
    pub fn forget_card(&mut self, card_id: &str) -> usize {
        let positions: Vec<Position> = self
            .iter()
            .filter(|pc| pc.card.id == card_id)
            .map(|pc| pc.position)
            .collect();
        for p in &positions {
            self.remove(*p);
        }
        positions.len()
    }

    /// Recompute every placement of `card` (matched by id) from its current
    /// ranges and description. Returns how many were refreshed.
    pub fn refresh_card(&mut self, card: &Arc<Card>) -> usize {
        let mut refreshed = 0;
        for placed in self.cells.values_mut().filter(|pc| pc.card.id == card.id) {
            *placed = PlacedCard::compute(Arc::clone(card), placed.position);
            refreshed += 1;
        }
        refreshed
    }

    pub fn get(&self, position: Position) -> Option<&PlacedCard> {
        self.cells.get(&position)
    }

    /// Placed cards in the order they were placed.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedCard> {
        self.order.iter().filter_map(|p| self.cells.get(p))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
