//! Position-value mapping engine.
//!
//! Given a grid position and a card's characteristic ranges, computes the
//! concrete value of each range and substitutes those values back into the
//! card's description. Everything here is pure except [`Atlas`], which only
//! holds the placements of the current session.

pub mod characteristic;
pub mod mapper;
pub mod placement;
pub mod position;
pub mod tags;

pub use characteristic::{Axis, Characteristic};
pub use mapper::{axis_index, compute_values, interpolate, value_key, CalculatedValues};
pub use placement::{Atlas, PlacedCard};
pub use position::{Position, PositionError, LEGAL_COORDINATES};
pub use tags::{describe_ranges, format_number, format_tag, parse_ranges, substitute};
