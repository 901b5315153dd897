//! Cell conquest: the incremental ownership update after a move.
//!
//! Only cells bordering the played position can change, and only while
//! they are still empty. A cell goes to the mover once the mover holds at
//! least half of its bordering positions (`count * 2 >= len`): 2 of 3,
//! 3 of 5, 3 of 6. Claims are final, so each cell is decided at most once
//! per line of play.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{BoardState, Owner};
use crate::topology::{CellId, PositionId, Topology};

/// Cells conquered by a single move. A position borders at most four cells.
pub type Conquered = SmallVec<[CellId; 4]>;

/// True if `owner` holds enough of the cell's positions to claim it.
#[must_use]
pub fn has_majority(topology: &Topology, state: &BoardState, cell: CellId, owner: Owner) -> bool {
    let borders = topology.cell(cell).borders();
    let held = borders
        .iter()
        .filter(|&&p| state.occupant(p) == owner)
        .count();
    held * 2 >= borders.len()
}

/// Claim every still-empty cell around `position` in which the occupant of
/// `position` now holds a majority. Returns the newly claimed cells.
pub fn update_cells(topology: &Topology, state: &mut BoardState, position: PositionId) -> Conquered {
    let mover = state.occupant(position);
    let mut conquered = Conquered::new();

    if mover.is_empty() {
        return conquered;
    }

    for &cell in topology.cells_containing(position) {
        if !state.cell_owner(cell).is_empty() {
            continue;
        }

        if has_majority(topology, state, cell, mover) {
            state.set_cell_owner(cell, mover);
            conquered.push(cell);
            info!(
                position = %topology.position(position),
                cell = %topology.cell(cell).coord(),
                owner = %mover,
                "cell conquered"
            );
        }
    }

    debug!(
        position = %topology.position(position),
        conquered = conquered.len(),
        "updated conquered cells"
    );
    conquered
}
