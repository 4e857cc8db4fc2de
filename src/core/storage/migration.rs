//! On-load migration of stored card records.
//!
//! Early card files stored only names and ranges. Those cards get a
//! description generated from their ranges the first time they are loaded.

use tracing::debug;

use crate::core::atlas::describe_ranges;
use crate::core::cards::Card;

/// Fill in missing descriptions. Returns the number of cards changed.
pub fn backfill_descriptions(cards: &mut [Card]) -> usize {
    let mut migrated = 0;
    for card in cards.iter_mut().filter(|c| c.description.is_empty()) {
        card.description = describe_ranges(&card.ranges);
        debug!("Backfilled description for card {} ('{}')", card.id, card.name);
        migrated += 1;
    }
    migrated
}
