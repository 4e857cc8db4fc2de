//! Property-based tests for description tags
//!
//! Tests invariants:
//! - parse_ranges(describe_ranges(r)) reproduces r up to ids
//! - Parsed ranges always get fresh, distinct ids
//! - Substituting a generated description leaves only the computed values
//! - Text without brackets never yields ranges
//! - Placed cards with well-formed tags leave nothing unresolved
//! - Any tag the parser accepts is replaced by substitution

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::core::atlas::{
    compute_values, describe_ranges, format_number, parse_ranges, substitute,
    tags::unresolved_tags, Characteristic, PlacedCard, LEGAL_COORDINATES,
};
use crate::core::cards::CharacteristicRange;
use crate::tests::common::{card_from_description, full_card, pos};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_range() -> impl Strategy<Value = CharacteristicRange> {
    (
        prop::sample::select(Characteristic::ALL.to_vec()),
        -100_000i32..100_000,
        -100_000i32..100_000,
    )
        .prop_map(|(c, min, max)| {
            CharacteristicRange::new(c, f64::from(min) / 10.0, f64::from(max) / 10.0)
        })
}

fn arb_ranges() -> impl Strategy<Value = Vec<CharacteristicRange>> {
    prop::collection::vec(arb_range(), 1..8)
}

/// Tag text as a user might type it: optional sign, stray zeros, spacing.
fn arb_typed_tag() -> impl Strategy<Value = String> {
    let number = "[+-]?0?[0-9]{1,3}(\\.[0-9]{0,2}0?)?";
    (
        prop::sample::select(Characteristic::ALL.to_vec()),
        " {0,2}",
        number,
        " ?",
        number,
    )
        .prop_map(|(c, gap, min, dash_gap, max)| {
            format!("[{}:{gap}{min}{dash_gap}-{dash_gap}{max}]", c.label())
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: formatting then parsing is lossless except for ids
    #[test]
    fn prop_describe_parse_round_trip(ranges in arb_ranges()) {
        let parsed = parse_ranges(&describe_ranges(&ranges));
        prop_assert_eq!(parsed.len(), ranges.len());
        for (original, back) in ranges.iter().zip(&parsed) {
            prop_assert!(original.same_bounds(back), "{:?} != {:?}", original, back);
        }
        let ids: HashSet<&str> = parsed.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(ids.len(), parsed.len());
    }

    /// Property: tags embedded in prose are still found, in order
    #[test]
    fn prop_parse_within_prose(ranges in arb_ranges(), filler in "[a-z ,.!]{0,20}") {
        let text: String = ranges
            .iter()
            .map(|r| format!("{filler}{}", crate::core::atlas::format_tag(r)))
            .collect();
        let parsed = parse_ranges(&text);
        prop_assert_eq!(parsed.len(), ranges.len());
        for (original, back) in ranges.iter().zip(&parsed) {
            prop_assert!(original.same_bounds(back));
        }
    }

    /// Property: substitution replaces every generated tag with its value
    #[test]
    fn prop_substitute_generated_description(
        ranges in arb_ranges(),
        x in prop::sample::select(LEGAL_COORDINATES.to_vec()),
        y in prop::sample::select(LEGAL_COORDINATES.to_vec())
    ) {
        let values = compute_values(&ranges, pos(x, y));
        let out = substitute(&describe_ranges(&ranges), &ranges, &values);
        let expected = values
            .values()
            .map(|v| format_number(*v))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(out, expected);
    }

    /// Property: text without brackets never parses to ranges
    #[test]
    fn prop_no_brackets_no_ranges(text in "[^\\[\\]]{0,100}") {
        prop_assert!(parse_ranges(&text).is_empty());
    }

    /// Property: a generated description resolves fully at every cell
    #[test]
    fn prop_full_card_resolves_everywhere(
        x in prop::sample::select(LEGAL_COORDINATES.to_vec()),
        y in prop::sample::select(LEGAL_COORDINATES.to_vec())
    ) {
        let placed = PlacedCard::compute(Arc::new(full_card()), pos(x, y));
        prop_assert_eq!(placed.calculated_values.len(), Characteristic::ALL.len());
        prop_assert!(unresolved_tags(&placed.calculated_description).is_empty());
    }

    /// Property: prose around tags survives substitution untouched
    #[test]
    fn prop_prose_survives_substitution(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        x in prop::sample::select(LEGAL_COORDINATES.to_vec()),
        y in prop::sample::select(LEGAL_COORDINATES.to_vec())
    ) {
        let card = card_from_description("Bolt", &format!("{prefix}[Сила: 1-8]{suffix}"));
        let placed = PlacedCard::compute(card, pos(x, y));
        let value = format_number(placed.calculated_values["power_0"]);
        prop_assert_eq!(placed.calculated_description, format!("{prefix}{value}{suffix}"));
    }

    /// Property: whatever the parser accepts, substitution can replace
    #[test]
    fn prop_parsed_tags_always_substitute(
        tag in arb_typed_tag(),
        x in prop::sample::select(LEGAL_COORDINATES.to_vec()),
        y in prop::sample::select(LEGAL_COORDINATES.to_vec())
    ) {
        let text = format!("Deals {tag} damage");
        let ranges = parse_ranges(&text);
        prop_assert!(ranges.len() <= 1);
        if let Some(range) = ranges.first() {
            let values = compute_values(&ranges, pos(x, y));
            let out = substitute(&text, &ranges, &values);
            prop_assert!(unresolved_tags(&out).is_empty(), "{} -> {}", text, out);
            let expected = format!("Deals {} damage", format_number(*values.values().next().unwrap()));
            prop_assert_eq!(out, expected);
            prop_assert_eq!(crate::core::atlas::format_tag(range), tag);
        }
    }
}
