//! Position-to-value mapping.
//!
//! Each characteristic reads one axis and maps its eight legal coordinates
//! bijectively onto indices `0..=7`. A range is then interpolated linearly
//! over those indices and rounded to one decimal.

use indexmap::IndexMap;

use super::characteristic::Characteristic;
use super::position::Position;
use crate::core::cards::CharacteristicRange;

/// Highest axis index. Ranges are split into this many steps.
pub const MAX_INDEX: u8 = 7;

/// Computed values keyed by `"<characteristic>_<range index>"`, in range order.
pub type CalculatedValues = IndexMap<String, f64>;

/// Index of `position` along the axis read by `characteristic`.
///
/// Positive coordinates are shifted by 3 instead of 4 to close the gap left
/// by the missing zero coordinate.
pub fn axis_index(characteristic: Characteristic, position: Position) -> u8 {
    let c = position.coordinate(characteristic.axis());
    let idx = if characteristic.ascending() {
        if c < 0 { c + 4 } else { c + 3 }
    } else if c > 0 {
        4 - c
    } else {
        3 - c
    };
    debug_assert!((0..=MAX_INDEX as i8).contains(&idx));
    idx as u8
}

/// Round half away from zero at the tenths digit.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Value of `range` at `position`.
pub fn interpolate(range: &CharacteristicRange, position: Position) -> f64 {
    let idx = axis_index(range.characteristic, position);
    let step = (range.max_value - range.min_value) / f64::from(MAX_INDEX);
    round_tenths(range.min_value + step * f64::from(idx))
}

pub fn value_key(characteristic: Characteristic, index: usize) -> String {
    format!("{characteristic}_{index}")
}

/// Values of every range at `position`. Two ranges with the same
/// characteristic get distinct keys.
pub fn compute_values(ranges: &[CharacteristicRange], position: Position) -> CalculatedValues {
    ranges
        .iter()
        .enumerate()
        .map(|(i, range)| (value_key(range.characteristic, i), interpolate(range, position)))
        .collect()
}
