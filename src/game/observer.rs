//! Game events and observers.
//!
//! The controller reports what happened to registered observers instead of
//! writing to any global log. Events carry board coordinates, not ids, so
//! observers need no access to the topology.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Player;
use crate::topology::{CellCoord, Position};

/// Something that happened to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was played.
    MoveApplied {
        ply: usize,
        player: Player,
        position: Position,
    },

    /// A cell was claimed by a move.
    CellConquered { cell: CellCoord, player: Player },

    /// A move connected the player's sides.
    GameWon { player: Player },

    /// The last move was taken back.
    MoveUndone { position: Position },

    /// The board was cleared.
    Reset,

    /// A game record replaced the state.
    Loaded { moves: usize },
}

/// Receives game events.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MoveApplied { ply, player, position } => {
                info!(ply, player = %player, position = %position, "move played");
            }
            GameEvent::CellConquered { cell, player } => {
                info!(cell = %cell, player = %player, "cell conquered");
            }
            GameEvent::GameWon { player } => info!(player = %player, "game won"),
            GameEvent::MoveUndone { position } => info!(position = %position, "move undone"),
            GameEvent::Reset => info!("game reset"),
            GameEvent::Loaded { moves } => info!(moves, "game record loaded"),
        }
    }
}
