//! Property-based tests for the position-value mapper
//!
//! Tests invariants:
//! - axis_index is a bijection from the 8 legal coordinates onto 0..=7
//! - Index 0 yields the rounded minimum, index 7 the rounded maximum
//! - Values never move against the range direction when stepping forward
//! - A range with min == max is constant over the whole grid
//! - Two ranges of the same characteristic get distinct, independent keys

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::atlas::{
    axis_index, compute_values, interpolate, mapper::round_tenths, Axis, Characteristic, Position,
    LEGAL_COORDINATES,
};
use crate::core::cards::CharacteristicRange;
use crate::tests::common::pos;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_characteristic() -> impl Strategy<Value = Characteristic> {
    prop_oneof![
        Just(Characteristic::Quality),
        Just(Characteristic::Quantity),
        Just(Characteristic::Cost),
        Just(Characteristic::Power),
    ]
}

fn arb_coordinate() -> impl Strategy<Value = i8> {
    prop::sample::select(LEGAL_COORDINATES.to_vec())
}

fn arb_position() -> impl Strategy<Value = Position> {
    (arb_coordinate(), arb_coordinate()).prop_map(|(x, y)| pos(x, y))
}

/// Bounds with at most one decimal, as typed into a card form.
fn arb_tenths() -> impl Strategy<Value = f64> {
    (-100_000i32..100_000).prop_map(|k| f64::from(k) / 10.0)
}

fn arb_range() -> impl Strategy<Value = CharacteristicRange> {
    (arb_characteristic(), arb_tenths(), arb_tenths())
        .prop_map(|(c, min, max)| CharacteristicRange::new(c, min, max))
}

/// Position whose index along `c`'s axis is `idx`, other coordinate `other`.
fn position_with_index(c: Characteristic, idx: u8, other: i8) -> Position {
    let coord = LEGAL_COORDINATES
        .into_iter()
        .find(|&v| axis_index(c, pos(v, v)) == idx)
        .expect("every index has a coordinate");
    match c.axis() {
        Axis::X => pos(coord, other),
        Axis::Y => pos(other, coord),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: every characteristic maps its 8 coordinates onto 0..=7 exactly once
    #[test]
    fn prop_axis_index_is_bijection(
        c in arb_characteristic(),
        other in arb_coordinate()
    ) {
        let indices: HashSet<u8> = LEGAL_COORDINATES
            .into_iter()
            .map(|v| match c.axis() {
                Axis::X => axis_index(c, pos(v, other)),
                Axis::Y => axis_index(c, pos(other, v)),
            })
            .collect();
        prop_assert_eq!(indices, (0u8..=7).collect::<HashSet<_>>());
    }

    /// Property: endpoints reproduce the stored bounds
    #[test]
    fn prop_endpoints_are_exact(range in arb_range(), other in arb_coordinate()) {
        let low = position_with_index(range.characteristic, 0, other);
        let high = position_with_index(range.characteristic, 7, other);
        prop_assert_eq!(interpolate(&range, low), round_tenths(range.min_value));
        prop_assert_eq!(interpolate(&range, high), round_tenths(range.max_value));
    }

    /// Property: stepping one index forward never goes against the range direction
    #[test]
    fn prop_monotonic_along_direction(range in arb_range(), other in arb_coordinate()) {
        let values: Vec<f64> = (0u8..=7)
            .map(|i| interpolate(&range, position_with_index(range.characteristic, i, other)))
            .collect();
        for pair in values.windows(2) {
            if range.max_value >= range.min_value {
                prop_assert!(pair[1] >= pair[0], "{:?} not ascending", values);
            } else {
                prop_assert!(pair[1] <= pair[0], "{:?} not descending", values);
            }
        }
    }

    /// Property: a degenerate range is constant
    #[test]
    fn prop_constant_range(c in arb_characteristic(), v in arb_tenths(), p in arb_position()) {
        let range = CharacteristicRange::new(c, v, v);
        prop_assert_eq!(interpolate(&range, p), v);
    }

    /// Property: duplicate characteristics never collapse into one key
    #[test]
    fn prop_duplicate_characteristics_keep_keys(
        c in arb_characteristic(),
        (a_min, a_max, b_min, b_max) in (arb_tenths(), arb_tenths(), arb_tenths(), arb_tenths()),
        p in arb_position()
    ) {
        let a = CharacteristicRange::new(c, a_min, a_max);
        let b = CharacteristicRange::new(c, b_min, b_max);
        let values = compute_values(&[a.clone(), b.clone()], p);

        prop_assert_eq!(values.len(), 2);
        prop_assert_eq!(values[&format!("{c}_0")], interpolate(&a, p));
        prop_assert_eq!(values[&format!("{c}_1")], interpolate(&b, p));
    }

    /// Property: the mapper reads only its own axis
    #[test]
    fn prop_other_axis_is_ignored(c in arb_characteristic(), p in arb_position(), q in arb_position()) {
        let same_axis = p.coordinate(c.axis()) == q.coordinate(c.axis());
        if same_axis {
            prop_assert_eq!(axis_index(c, p), axis_index(c, q));
        }
    }
}
