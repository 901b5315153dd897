//! Static board geometry: positions, cells, and which positions border
//! which cell.
//!
//! The topology is verified input. It is not checked for geometric
//! soundness, only for being well-formed (parsable notation, non-empty
//! cells, unique coordinates, sizes that fit the bit sets).
//!
//! ## Usage
//!
//! ```
//! use conhex::topology::{CellCoord, Topology};
//!
//! let topology = Topology::conhex();
//! assert_eq!(topology.cell_count(), 41);
//! assert_eq!(topology.position_count(), 69);
//!
//! let corner = topology.cell_id(CellCoord::new(1, 1)).unwrap();
//! assert_eq!(topology.cell(corner).borders().len(), 3);
//! ```

mod bits;
mod position;
mod table;

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

pub use bits::{CellSet, PositionMask, MAX_CELLS, MAX_POSITIONS};
pub use position::{Axis, CellCoord, CellId, ParsePositionError, Position, PositionId};
pub use table::{HIGH_BORDER, LOW_BORDER};

/// Errors building a custom topology.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("cell {cell} has unreadable position: {source}")]
    BadPosition {
        cell: CellCoord,
        source: ParsePositionError,
    },

    #[error("cell {0} has no bordering positions")]
    EmptyCell(CellCoord),

    #[error("cell {0} is listed twice")]
    DuplicateCell(CellCoord),

    #[error("{0} positions exceed the supported maximum of {max}", max = MAX_POSITIONS)]
    TooManyPositions(usize),

    #[error("{0} cells exceed the supported maximum of {max}", max = MAX_CELLS)]
    TooManyCells(usize),
}

/// A cell and its bordering positions.
#[derive(Clone, Debug)]
pub struct Cell {
    coord: CellCoord,
    borders: SmallVec<[PositionId; 6]>,
    mask: PositionMask,
}

impl Cell {
    #[must_use]
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Bordering positions, in table order.
    #[must_use]
    pub fn borders(&self) -> &[PositionId] {
        &self.borders
    }

    /// Bordering positions as a bit set.
    #[must_use]
    pub fn mask(&self) -> PositionMask {
        self.mask
    }
}

/// Board geometry shared by every game on the same board.
#[derive(Clone, Debug)]
pub struct Topology {
    positions: Vec<Position>,
    lookup: FxHashMap<Position, PositionId>,
    cells: Vec<Cell>,
    cell_lookup: FxHashMap<CellCoord, CellId>,
    /// Cells bordered by each position, indexed by `PositionId`.
    cells_by_position: Vec<SmallVec<[CellId; 4]>>,
    low_border: u8,
    high_border: u8,
}

impl Topology {
    /// The published ConHex board, built once and shared.
    #[must_use]
    pub fn conhex() -> Arc<Topology> {
        static CONHEX: OnceLock<Arc<Topology>> = OnceLock::new();

        CONHEX
            .get_or_init(|| {
                let rows = table::CONHEX_CELLS
                    .iter()
                    .map(|&(x, y, borders)| (CellCoord::new(x, y), borders));
                match Topology::new(rows, LOW_BORDER, HIGH_BORDER) {
                    Ok(topology) => Arc::new(topology),
                    Err(err) => unreachable!("built-in ConHex table is malformed: {err}"),
                }
            })
            .clone()
    }

    /// Build a topology from `(cell, bordering positions)` rows.
    ///
    /// Positions are the union of all rows, deduplicated and sorted in
    /// canonical order (row, then column).
    pub fn new<'a, I>(rows: I, low_border: u8, high_border: u8) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = (CellCoord, &'a [&'a str])>,
    {
        let mut parsed: Vec<(CellCoord, Vec<Position>)> = Vec::new();

        for (coord, notations) in rows {
            if notations.is_empty() {
                return Err(TopologyError::EmptyCell(coord));
            }
            if parsed.iter().any(|(c, _)| *c == coord) {
                return Err(TopologyError::DuplicateCell(coord));
            }

            let borders = notations
                .iter()
                .map(|n| n.parse::<Position>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| TopologyError::BadPosition { cell: coord, source })?;
            parsed.push((coord, borders));
        }

        if parsed.len() > MAX_CELLS {
            return Err(TopologyError::TooManyCells(parsed.len()));
        }

        let mut positions: Vec<Position> = parsed
            .iter()
            .flat_map(|(_, borders)| borders.iter().copied())
            .collect();
        positions.sort_unstable();
        positions.dedup();

        if positions.len() > MAX_POSITIONS {
            return Err(TopologyError::TooManyPositions(positions.len()));
        }

        let lookup: FxHashMap<Position, PositionId> = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, PositionId(i as u8)))
            .collect();

        let mut cells_by_position = vec![SmallVec::new(); positions.len()];
        let mut cells = Vec::with_capacity(parsed.len());
        let mut cell_lookup = FxHashMap::default();

        for (i, (coord, borders)) in parsed.into_iter().enumerate() {
            let cell_id = CellId(i as u8);
            let borders: SmallVec<[PositionId; 6]> =
                borders.iter().map(|p| lookup[p]).collect();

            for &pos in &borders {
                cells_by_position[pos.index()].push(cell_id);
            }

            cell_lookup.insert(coord, cell_id);
            cells.push(Cell {
                coord,
                mask: borders.iter().copied().collect(),
                borders,
            });
        }

        Ok(Self {
            positions,
            lookup,
            cells,
            cell_lookup,
            cells_by_position,
            low_border,
            high_border,
        })
    }

    // === Positions ===

    /// All positions in canonical order; `PositionId(i)` is `positions()[i]`.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Id of a position, or `None` if it is not on this board.
    #[must_use]
    pub fn position_id(&self, position: Position) -> Option<PositionId> {
        self.lookup.get(&position).copied()
    }

    #[must_use]
    pub fn position(&self, id: PositionId) -> Position {
        self.positions[id.index()]
    }

    /// Cells bordered by a position.
    #[must_use]
    pub fn cells_containing(&self, id: PositionId) -> &[CellId] {
        &self.cells_by_position[id.index()]
    }

    // === Cells ===

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    #[must_use]
    pub fn cell_id(&self, coord: CellCoord) -> Option<CellId> {
        self.cell_lookup.get(&coord).copied()
    }

    /// Iterate over all cell ids.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len() as u8).map(CellId)
    }

    // === Borders ===

    #[must_use]
    pub fn low_border(&self) -> u8 {
        self.low_border
    }

    #[must_use]
    pub fn high_border(&self) -> u8 {
        self.high_border
    }

    /// True if the cell touches the near side of `axis`.
    #[must_use]
    pub fn is_near_side(&self, id: CellId, axis: Axis) -> bool {
        self.cell(id).coord.along(axis) <= self.low_border
    }

    /// True if the cell touches the far side of `axis`.
    #[must_use]
    pub fn is_far_side(&self, id: CellId, axis: Axis) -> bool {
        self.cell(id).coord.along(axis) >= self.high_border
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_conhex_sizes() {
        let t = Topology::conhex();
        assert_eq!(t.cell_count(), 41);
        assert_eq!(t.position_count(), 69);
        assert_eq!(t.low_border(), 2);
        assert_eq!(t.high_border(), 8);
    }

    #[test]
    fn test_conhex_is_shared() {
        assert!(Arc::ptr_eq(&Topology::conhex(), &Topology::conhex()));
    }

    #[test]
    fn test_positions_canonical_order() {
        let t = Topology::conhex();
        let first: Vec<String> = t.positions()[..4].iter().map(ToString::to_string).collect();
        assert_eq!(first, ["A1", "K1", "C2", "D2"]);

        let last = t.positions().last().unwrap();
        assert_eq!(last.to_string(), "K11");

        assert!(t.positions().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_position_ids_follow_order() {
        let t = Topology::conhex();
        for (i, &p) in t.positions().iter().enumerate() {
            assert_eq!(t.position_id(p), Some(PositionId(i as u8)));
            assert_eq!(t.position(PositionId(i as u8)), p);
        }
        assert_eq!(t.position_id(pos("A2")), None);
        assert_eq!(t.position_id(pos("L5")), None);
    }

    #[test]
    fn test_cell_sizes() {
        let t = Topology::conhex();
        let mut sizes: Vec<usize> = t.cells().iter().map(|c| c.borders().len()).collect();
        sizes.sort_unstable();
        sizes.dedup();
        assert_eq!(sizes, vec![3, 5, 6]);

        let centre = t.cell_id(CellCoord::new(5, 5)).unwrap();
        assert_eq!(t.cell(centre).borders().len(), 5);
    }

    #[test]
    fn test_cells_containing_is_inverse_of_borders() {
        let t = Topology::conhex();
        for cell_id in t.cell_ids() {
            for &p in t.cell(cell_id).borders() {
                assert!(t.cells_containing(p).contains(&cell_id));
            }
        }
        let total: usize = (0..t.position_count())
            .map(|i| t.cells_containing(PositionId(i as u8)).len())
            .sum();
        let expected: usize = t.cells().iter().map(|c| c.borders().len()).sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_cell_mask_matches_borders() {
        let t = Topology::conhex();
        for cell in t.cells() {
            assert_eq!(cell.mask().len() as usize, cell.borders().len());
            assert!(cell.borders().iter().all(|&p| cell.mask().contains(p)));
        }
    }

    #[test]
    fn test_border_sides() {
        let t = Topology::conhex();
        let top_left = t.cell_id(CellCoord::new(1, 1)).unwrap();
        let bottom_right = t.cell_id(CellCoord::new(9, 9)).unwrap();
        let middle = t.cell_id(CellCoord::new(5, 5)).unwrap();

        assert!(t.is_near_side(top_left, Axis::Y));
        assert!(t.is_far_side(bottom_right, Axis::X));
        assert!(!t.is_near_side(middle, Axis::X));
        assert!(!t.is_far_side(middle, Axis::Y));
    }

    #[test]
    fn test_custom_topology_errors() {
        let empty: &[&str] = &[];
        let err = Topology::new([(CellCoord::new(1, 1), empty)], 1, 2).unwrap_err();
        assert_eq!(err, TopologyError::EmptyCell(CellCoord::new(1, 1)));

        let bad: &[&str] = &["A1", "??"];
        let err = Topology::new([(CellCoord::new(1, 1), bad)], 1, 2).unwrap_err();
        assert!(matches!(err, TopologyError::BadPosition { .. }));

        let ok: &[&str] = &["A1", "B1", "C1"];
        let err = Topology::new(
            [(CellCoord::new(1, 1), ok), (CellCoord::new(1, 1), ok)],
            1,
            2,
        )
        .unwrap_err();
        assert_eq!(err, TopologyError::DuplicateCell(CellCoord::new(1, 1)));
    }
}
