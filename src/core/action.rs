//! Move representation for history and events.
//!
//! The board history stores positions only; the mover of ply `n` is
//! implied by alternation. `Move` pairs them back up for callers.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::topology::Position;

/// A move that was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based ply index in the game.
    pub ply: usize,

    /// The player who moved.
    pub player: Player,

    /// The position claimed.
    pub position: Position,
}

impl Move {
    #[must_use]
    pub fn new(ply: usize, player: Player, position: Position) -> Self {
        Self {
            ply,
            player,
            position,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} {}", self.ply + 1, self.player, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(0, Player::Player1, "H5".parse().unwrap());
        assert_eq!(mv.to_string(), "1. Player 1 H5");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(3, Player::Player2, "C10".parse().unwrap());
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
