//! Board coordinates: positions (points players claim) and cells (regions
//! bordered by positions).
//!
//! ## Position
//!
//! A column letter plus a row number, written `H5` or `K11`. Ordering is
//! row-major: by row ascending, then by column ascending. This is the
//! canonical enumeration order used everywhere in the crate.
//!
//! ## CellCoord
//!
//! A cell is addressed by its `(x, y)` coordinate on the 9x9 cell grid.
//! Player 2 connects along `x` (left/right), Player 1 along `y` (top/bottom).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board position in `<column letter><row>` notation.
///
/// Field order matters: the derived `Ord` compares `row` first.
///
/// ```
/// use conhex::topology::Position;
///
/// let h5: Position = "H5".parse().unwrap();
/// assert_eq!(h5.column(), 'H');
/// assert_eq!(h5.row(), 5);
/// assert_eq!(h5.to_string(), "H5");
///
/// let k1: Position = "K1".parse().unwrap();
/// let a11: Position = "A11".parse().unwrap();
/// assert!(k1 < h5 && h5 < a11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Create a position from a column letter (`'A'..='Z'`) and a row (`>= 1`).
    #[must_use]
    pub fn new(column: char, row: u8) -> Option<Self> {
        if !column.is_ascii_uppercase() || row == 0 {
            return None;
        }
        Some(Self {
            row,
            column: column as u8,
        })
    }

    /// Column letter.
    #[must_use]
    pub const fn column(self) -> char {
        self.column as char
    }

    /// Row number (1-based).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column(), self.row)
    }
}

/// Failure to read a position from notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{notation}' is not a position (expected a column letter and a row, like H5)")]
pub struct ParsePositionError {
    pub notation: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let column = chars.next().ok_or_else(err)?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let row: u8 = digits.parse().map_err(|_| err())?;
        Self::new(column, row).ok_or_else(err)
    }
}

/// Index of a position inside a [`Topology`](super::Topology).
///
/// Ids follow the canonical position order: id 0 is the first position
/// by row, then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionId(pub u8);

impl PositionId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a cell inside a [`Topology`](super::Topology).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One of the two board axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right.
    X,
    /// Top to bottom.
    Y,
}

/// Cell coordinate on the cell grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: u8,
    pub y: u8,
}

impl CellCoord {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The coordinate value along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        let p: Position = "K11".parse().unwrap();
        assert_eq!(p.column(), 'K');
        assert_eq!(p.row(), 11);
        assert_eq!(p.to_string(), "K11");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "H", "5H", "h5", "H0", "H-1", "H5x", "resign", "H999"] {
            assert!(bad.parse::<Position>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_position_order_is_row_major() {
        let mut positions: Vec<Position> = ["C10", "A1", "B3", "K1", "A11", "C2"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        positions.sort();

        let names: Vec<String> = positions.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["A1", "K1", "C2", "B3", "C10", "A11"]);
    }

    #[test]
    fn test_cell_coord_along() {
        let cell = CellCoord::new(3, 7);
        assert_eq!(cell.along(Axis::X), 3);
        assert_eq!(cell.along(Axis::Y), 7);
        assert_eq!(format!("{}", cell), "3,7");
    }

    #[test]
    fn test_position_serialization() {
        let p: Position = "F6".parse().unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
