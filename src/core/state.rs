//! Board state: position occupancy, cell ownership, turn, winner, history.
//!
//! ## BoardState
//!
//! The mutable half of a game. Cell ownership is a single owner per cell
//! (indexed by `CellId`), so a cell can never sit in two ownership sets;
//! the per-owner sets are derived on demand.
//!
//! The history is an `im::Vector`, making a clone of the whole state cheap
//! enough to build candidate states (record loading) alongside a live one.
//!
//! ## Snapshot
//!
//! A self-contained, serializable copy of the state in terms of board
//! coordinates rather than ids, handed to rendering collaborators.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::error::SnapshotError;
use super::player::{Owner, OwnerMap, Player, PlayerMap};
use crate::topology::{CellCoord, CellId, Position, PositionId, Topology};

/// Mutable state of one game on a given topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    /// Occupant of each position, indexed by `PositionId`.
    occupancy: Vec<Owner>,

    /// Owner of each cell, indexed by `CellId`.
    cell_owners: Vec<Owner>,

    /// Player to move.
    pub(crate) current_player: Player,

    /// Set once a player connects their sides.
    pub(crate) winner: Option<Player>,

    /// Positions played, in order.
    history: Vector<PositionId>,
}

impl BoardState {
    /// Empty board: every position and cell empty, Player 1 to move.
    #[must_use]
    pub fn new(topology: &Topology) -> Self {
        Self {
            occupancy: vec![Owner::Empty; topology.position_count()],
            cell_owners: vec![Owner::Empty; topology.cell_count()],
            current_player: Player::Player1,
            winner: None,
            history: Vector::new(),
        }
    }

    // === Positions ===

    #[must_use]
    pub fn occupant(&self, id: PositionId) -> Owner {
        self.occupancy[id.index()]
    }

    pub(crate) fn set_occupant(&mut self, id: PositionId, owner: Owner) {
        self.occupancy[id.index()] = owner;
    }

    /// Occupancy of every position, indexed by `PositionId`.
    #[must_use]
    pub fn occupancy(&self) -> &[Owner] {
        &self.occupancy
    }

    /// Ids of empty positions, ascending (canonical order).
    pub fn free_position_ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.occupancy
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_empty())
            .map(|(i, _)| PositionId(i as u8))
    }

    // === Cells ===

    #[must_use]
    pub fn cell_owner(&self, id: CellId) -> Owner {
        self.cell_owners[id.index()]
    }

    pub(crate) fn set_cell_owner(&mut self, id: CellId, owner: Owner) {
        self.cell_owners[id.index()] = owner;
    }

    /// Owner of every cell, indexed by `CellId`.
    #[must_use]
    pub fn cell_owners(&self) -> &[Owner] {
        &self.cell_owners
    }

    /// Cells currently owned by `owner`, ascending by id.
    pub fn cells_owned_by(&self, owner: Owner) -> impl Iterator<Item = CellId> + '_ {
        self.cell_owners
            .iter()
            .enumerate()
            .filter(move |(_, o)| **o == owner)
            .map(|(i, _)| CellId(i as u8))
    }

    // === Turn and result ===

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<PositionId> {
        &self.history
    }

    pub(crate) fn push_history(&mut self, id: PositionId) {
        self.history.push_back(id);
    }

    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Convert to a coordinate-based snapshot.
    #[must_use]
    pub fn snapshot(&self, topology: &Topology, player_names: &PlayerMap<String>) -> Snapshot {
        let occupancy = topology
            .positions()
            .iter()
            .zip(&self.occupancy)
            .map(|(&p, &o)| (p, o))
            .collect();

        let cells = topology
            .cells()
            .iter()
            .zip(&self.cell_owners)
            .map(|(c, &o)| (c.coord(), o))
            .collect();

        let moves = self
            .history
            .iter()
            .enumerate()
            .filter_map(|(ply, &id)| {
                let player = self.occupant(id).player()?;
                Some(Move::new(ply, player, topology.position(id)))
            })
            .collect();

        Snapshot {
            occupancy,
            cells,
            current_player: self.current_player,
            winner: self.winner,
            moves,
            player_names: player_names.clone(),
        }
    }
}

/// Read-only copy of a game's observable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every position with its occupant, canonical order.
    pub occupancy: Vec<(Position, Owner)>,

    /// Every cell with its owner, topology order.
    pub cells: Vec<(CellCoord, Owner)>,

    pub current_player: Player,

    pub winner: Option<Player>,

    /// Moves played, in order.
    pub moves: Vec<Move>,

    pub player_names: PlayerMap<String>,
}

impl Snapshot {
    /// Cells grouped by owner. Every cell appears in exactly one group.
    #[must_use]
    pub fn ownership(&self) -> OwnerMap<Vec<CellCoord>> {
        let mut map: OwnerMap<Vec<CellCoord>> = OwnerMap::with_default();
        for &(cell, owner) in &self.cells {
            map[owner].push(cell);
        }
        map
    }

    /// Occupant of a position, `None` if the position is not on the board.
    #[must_use]
    pub fn occupant(&self, position: Position) -> Option<Owner> {
        self.occupancy
            .iter()
            .find(|(p, _)| *p == position)
            .map(|&(_, o)| o)
    }

    /// Owner of a cell, `None` if the cell is not on the board.
    #[must_use]
    pub fn cell_owner(&self, cell: CellCoord) -> Option<Owner> {
        self.cells.iter().find(|(c, _)| *c == cell).map(|&(_, o)| o)
    }

    /// Binary encoding, stable for identical states.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let topology = Topology::conhex();
        let state = BoardState::new(&topology);

        assert_eq!(state.occupancy().len(), 69);
        assert!(state.occupancy().iter().all(|o| o.is_empty()));
        assert_eq!(state.cells_owned_by(Owner::Empty).count(), 41);
        assert_eq!(state.current_player(), Player::Player1);
        assert_eq!(state.winner(), None);
        assert_eq!(state.ply_count(), 0);
    }

    #[test]
    fn test_free_position_ids() {
        let topology = Topology::conhex();
        let mut state = BoardState::new(&topology);

        state.set_occupant(PositionId(0), Owner::Player1);
        state.set_occupant(PositionId(5), Owner::Player2);

        let free: Vec<_> = state.free_position_ids().collect();
        assert_eq!(free.len(), 67);
        assert_eq!(free[0], PositionId(1));
        assert!(!free.contains(&PositionId(5)));
    }

    #[test]
    fn test_cells_owned_by() {
        let topology = Topology::conhex();
        let mut state = BoardState::new(&topology);

        state.set_cell_owner(CellId(3), Owner::Player2);

        assert_eq!(state.cells_owned_by(Owner::Player2).collect::<Vec<_>>(), vec![CellId(3)]);
        assert_eq!(state.cells_owned_by(Owner::Empty).count(), 40);
        assert_eq!(state.cells_owned_by(Owner::Player1).count(), 0);
    }

    #[test]
    fn test_snapshot_ownership_partition() {
        let topology = Topology::conhex();
        let mut state = BoardState::new(&topology);
        state.set_cell_owner(CellId(0), Owner::Player1);

        let snapshot = state.snapshot(&topology, &PlayerMap::new(|p| p.to_string()));
        let ownership = snapshot.ownership();

        assert_eq!(ownership[Owner::Player1], vec![CellCoord::new(1, 1)]);
        assert_eq!(ownership[Owner::Empty].len(), 40);
        assert!(ownership[Owner::Player2].is_empty());
        assert_eq!(snapshot.cell_owner(CellCoord::new(1, 1)), Some(Owner::Player1));
        assert_eq!(snapshot.cell_owner(CellCoord::new(1, 2)), None);
    }

    #[test]
    fn test_snapshot_bytes_are_stable() {
        let topology = Topology::conhex();
        let names = PlayerMap::new(|p| p.to_string());
        let a = BoardState::new(&topology).snapshot(&topology, &names);
        let b = BoardState::new(&topology).snapshot(&topology, &names);

        assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
    }
}
