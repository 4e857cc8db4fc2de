//! Grid positions on the 8x8 atlas.
//!
//! Coordinates run from -4 to 4 on both axes and skip zero. A [`Position`]
//! can only be built through [`Position::new`], so every value of the type
//! is a legal cell.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::characteristic::Axis;

/// Largest absolute coordinate on either axis.
pub const AXIS_EXTENT: i8 = 4;

/// The eight legal coordinates of one axis, in ascending order.
pub const LEGAL_COORDINATES: [i8; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("coordinate 0 is not a grid cell ({axis} axis)")]
    ZeroCoordinate { axis: char },

    #[error("coordinate {value} on {axis} axis is outside -4..=4")]
    OutOfRange { axis: char, value: i64 },
}

/// A legal atlas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    x: i8,
    y: i8,
}

#[derive(Serialize, Deserialize)]
struct RawPosition {
    x: i64,
    y: i64,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.x, raw.y)
    }
}

impl From<Position> for RawPosition {
    fn from(p: Position) -> Self {
        RawPosition {
            x: p.x.into(),
            y: p.y.into(),
        }
    }
}

fn check(axis: char, value: i64) -> Result<i8, PositionError> {
    if value == 0 {
        return Err(PositionError::ZeroCoordinate { axis });
    }
    if value.abs() > i64::from(AXIS_EXTENT) {
        return Err(PositionError::OutOfRange { axis, value });
    }
    // In range, so the narrowing cannot fail.
    Ok(value as i8)
}

impl Position {
    /// Cell with both coordinates at -4.
    pub const TOP_LEFT: Position = Position { x: -4, y: -4 };

    pub fn new(x: impl Into<i64>, y: impl Into<i64>) -> Result<Self, PositionError> {
        Ok(Self {
            x: check('x', x.into())?,
            y: check('y', y.into())?,
        })
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn coordinate(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// All 64 cells, row by row: y ascending, then x ascending.
    pub fn all() -> impl Iterator<Item = Position> {
        LEGAL_COORDINATES
            .into_iter()
            .flat_map(|y| LEGAL_COORDINATES.into_iter().map(move |x| Position { x, y }))
    }

    /// Neighbouring cell one step along `axis`, hopping over zero.
    /// Returns `None` at the edge of the grid.
    pub fn step(&self, axis: Axis, forward: bool) -> Option<Position> {
        let current = self.coordinate(axis);
        let idx = LEGAL_COORDINATES.iter().position(|&c| c == current)?;
        let next = if forward {
            LEGAL_COORDINATES.get(idx + 1)?
        } else {
            LEGAL_COORDINATES.get(idx.checked_sub(1)?)?
        };
        Some(match axis {
            Axis::X => Position { x: *next, y: self.y },
            Axis::Y => Position { x: self.x, y: *next },
        })
    }
}

fn signed(v: i8) -> String {
    if v > 0 {
        format!("+{v}")
    } else {
        v.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", signed(self.x), signed(self.y))
    }
}
