//! Fixed-width bit sets over position and cell ids.
//!
//! The board is small enough that every position fits in a `u128` and every
//! cell in a `u64`, so connectivity closures reduce to word operations.

use serde::{Deserialize, Serialize};

use super::position::{CellId, PositionId};

/// Maximum number of positions a topology may have.
pub const MAX_POSITIONS: usize = 128;

/// Maximum number of cells a topology may have.
pub const MAX_CELLS: usize = 64;

/// Set of positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionMask(u128);

impl PositionMask {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn contains(self, id: PositionId) -> bool {
        self.0 & (1u128 << id.0) != 0
    }

    pub fn insert(&mut self, id: PositionId) {
        self.0 |= 1u128 << id.0;
    }

    /// True if the two sets share a position.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn union_with(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<PositionId> for PositionMask {
    fn from_iter<I: IntoIterator<Item = PositionId>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for id in iter {
            mask.insert(id);
        }
        mask
    }
}

/// Set of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSet(u64);

impl CellSet {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub const fn contains(self, id: CellId) -> bool {
        self.0 & (1u64 << id.0) != 0
    }

    pub fn insert(&mut self, id: CellId) {
        self.0 |= 1u64 << id.0;
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over member ids in ascending order.
    pub fn iter(self) -> impl Iterator<Item = CellId> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let id = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(CellId(id))
        })
    }
}

impl FromIterator<CellId> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellId>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}
