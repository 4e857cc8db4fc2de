//! Description tags: `[<Label>: <min>-<max>]`.
//!
//! Card descriptions embed their ranges as bracketed tags. [`parse_ranges`]
//! reads tags out of free text and [`substitute`] replaces them with values
//! computed for a grid position. Both directions use the label table in
//! [`Characteristic`] and the number rendering of [`format_number`], so a
//! tag produced by [`format_tag`] is always matched by both.
//!
//! The grammar is exact: one space after the colon, no other whitespace,
//! and numbers written the way [`format_number`] writes them (no `+`, no
//! leading or trailing zeros). [`parse_ranges`] only accepts tags that
//! [`format_tag`] would reproduce character for character, so every parsed
//! tag can be substituted.
//!
//! Substitution is literal. A tag whose numbers are written differently
//! from the stored range (`1.0` vs `1`) is left in place; callers can find
//! such leftovers with [`unresolved_tags`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::characteristic::Characteristic;
use super::mapper::{value_key, CalculatedValues};
use crate::core::cards::CharacteristicRange;

const NUMBER: &str = r"-?\d+(?:\.\d+)?";

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let labels = Characteristic::ALL
        .iter()
        .map(|c| regex::escape(c.label()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"\[(?P<label>{labels}): (?P<min>{NUMBER})-(?P<max>{NUMBER})\]"
    );
    Regex::new(&pattern).expect("tag pattern is a valid regex")
});

/// Shortest decimal rendering; whole numbers carry no fractional part.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    format!("{value}")
}

pub fn format_tag(range: &CharacteristicRange) -> String {
    format!(
        "[{}: {}-{}]",
        range.characteristic.label(),
        format_number(range.min_value),
        format_number(range.max_value)
    )
}

/// Tags for all ranges, space separated. Used as the generated description
/// of cards that have none.
pub fn describe_ranges(ranges: &[CharacteristicRange]) -> String {
    ranges.iter().map(format_tag).collect::<Vec<_>>().join(" ")
}

/// Ranges for every well-formed tag in `text`, in order of appearance.
/// Each gets a new id. Anything that is not a tag is ignored, including
/// tags whose numbers are not in canonical form (`1.50`, `-0`, `007`).
pub fn parse_ranges(text: &str) -> Vec<CharacteristicRange> {
    TAG_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let characteristic = Characteristic::from_label(&caps["label"])?;
            let min = caps["min"].parse::<f64>().ok()?;
            let max = caps["max"].parse::<f64>().ok()?;
            let range = CharacteristicRange::new(characteristic, min, max);
            (format_tag(&range) == caps[0]).then_some(range)
        })
        .collect()
}

/// Replace each range's tag in `template` with its computed value.
///
/// Every occurrence of a tag is replaced. Ranges without a value in
/// `values` are skipped.
pub fn substitute(
    template: &str,
    ranges: &[CharacteristicRange],
    values: &CalculatedValues,
) -> String {
    let mut out = template.to_string();
    for (i, range) in ranges.iter().enumerate() {
        let Some(value) = values.get(&value_key(range.characteristic, i)) else {
            continue;
        };
        out = out.replace(&format_tag(range), &format_number(*value));
    }
    out
}

/// Well-formed tags still present in `text`.
pub fn unresolved_tags(text: &str) -> Vec<String> {
    TAG_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
