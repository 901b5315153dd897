//! Win detection.
//!
//! Player 1 must connect the top and bottom sides (cell `y`), Player 2 the
//! left and right sides (cell `x`). Two owned cells are adjacent when they
//! share a bordering position. A player has won when some owned cell on the
//! near side (coordinate `<= low_border`) reaches an owned cell on the far
//! side (coordinate `>= high_border`) through adjacent owned cells.
//!
//! Reachability is computed as a fixed point over the accumulated set of
//! bordering positions: starting from one near-side cell, keep absorbing
//! every owned cell whose positions intersect the set until nothing changes.

use tracing::{debug, info, instrument};

use crate::core::{BoardState, Owner, Player, WinCheck};
use crate::topology::{CellId, CellSet, Topology};

/// Owned cells of `player`, as a bit set.
fn owned_cells(state: &BoardState, player: Player) -> CellSet {
    state.cells_owned_by(Owner::from(player)).collect()
}

/// Cells reachable from `start` through cells in `owned`, `start` included.
#[must_use]
pub fn connected_from(topology: &Topology, owned: CellSet, start: CellId) -> CellSet {
    let mut reached = CellSet::EMPTY;
    reached.insert(start);
    let mut cloud = topology.cell(start).mask();

    loop {
        let before = reached.len();

        for cell in owned.iter() {
            if reached.contains(cell) {
                continue;
            }
            let mask = topology.cell(cell).mask();
            if mask.intersects(cloud) {
                cloud.union_with(mask);
                reached.insert(cell);
            }
        }

        if reached.len() == before {
            return reached;
        }
    }
}

/// True if `player`'s cells connect their two sides.
#[must_use]
pub fn is_connected(topology: &Topology, state: &BoardState, player: Player) -> bool {
    let axis = player.axis();
    let owned = owned_cells(state, player);

    owned
        .iter()
        .filter(|&cell| topology.is_near_side(cell, axis))
        .any(|start| {
            let reached = connected_from(topology, owned, start);
            debug!(
                player = %player,
                start = %topology.cell(start).coord(),
                reached = reached.len(),
                "connected cells from near side"
            );
            reached.iter().any(|cell| topology.is_far_side(cell, axis))
        })
}

/// The quick-reject of [`WinCheck::BorderHeuristic`]: true when the
/// player's border cells show exactly two distinct axis values.
///
/// This does not imply the player is unconnected: a chain whose border
/// cells sit at one near and one far coordinate (1 and 9, or 2 and 8)
/// triggers it as well.
#[must_use]
pub fn border_heuristic_skips(topology: &Topology, state: &BoardState, player: Player) -> bool {
    let axis = player.axis();
    let mut seen: u32 = 0;

    for cell in owned_cells(state, player).iter() {
        if topology.is_near_side(cell, axis) || topology.is_far_side(cell, axis) {
            let value = topology.cell(cell).coord().along(axis);
            seen |= 1u32 << (value % 32);
        }
    }

    seen.count_ones() == 2
}

/// Find a winner without modifying the state. Players are checked in
/// order, Player 1 first.
#[instrument(level = "debug", skip(topology, state))]
pub fn find_winner(topology: &Topology, state: &BoardState, strategy: WinCheck) -> Option<Player> {
    for player in Player::ALL {
        if strategy == WinCheck::BorderHeuristic && border_heuristic_skips(topology, state, player) {
            debug!(player = %player, "border heuristic skipped connectivity scan");
            continue;
        }

        if is_connected(topology, state, player) {
            info!(player = %player, "player has won");
            return Some(player);
        }
    }

    debug!("none of the players has won yet");
    None
}
