//! Error types surfaced by the engine.

use crate::core::player::Owner;
use crate::topology::Position;

/// Why a move was rejected. The board is unchanged on either error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The position is not on the board (or not a position at all).
    #[error("{notation} is not a valid position")]
    InvalidPosition { notation: String },

    /// The position already holds a stone.
    #[error("can't play {position}; this position is already taken by {owner}")]
    PositionOccupied { position: Position, owner: Owner },
}

/// Failure to encode a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] bincode::Error),
}
