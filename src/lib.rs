//! # conhex
//!
//! A game-state engine for ConHex, a two-player connection game.
//!
//! Players alternately claim positions on the board. Positions border
//! cells; a player claims a cell by holding at least half of its bordering
//! positions. Player 1 wins by linking the top and bottom sides with
//! claimed cells, Player 2 by linking left and right.
//!
//! ## Design Principles
//!
//! 1. **Immutable Topology**: the board geometry is built once and shared
//!    through `Arc`; only the `BoardState` changes.
//!
//! 2. **Derived Ownership**: each cell has exactly one owner entry, so the
//!    per-player ownership sets can never overlap.
//!
//! 3. **Replay Over Bookkeeping**: undo and record loading rebuild state by
//!    replaying moves on an empty board.
//!
//! ## Modules
//!
//! - `topology`: positions, cells, incidence tables, bit sets
//! - `core`: players, board state, configuration, errors, RNG
//! - `rules`: cell conquest, win detection, move engine
//! - `game`: the `Game` controller and its observers
//! - `record`: LittleGolem game records
//! - `render`: ASCII board
//! - `playout`: seeded random playouts

pub mod core;
pub mod game;
pub mod playout;
pub mod record;
pub mod render;
pub mod rules;
pub mod topology;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardState, GameConfig, GameRng, GameRngState, Move, MoveError, Owner, OwnerMap, Player,
    PlayerMap, Snapshot, SnapshotError, WinCheck,
};

pub use crate::game::{Game, GameEvent, GameObserver, TracingObserver};

pub use crate::playout::{playout_wins, random_playout};

pub use crate::record::{GameRecord, RecordError};

pub use crate::rules::{MoveOutcome, ReplayFailure};

pub use crate::topology::{
    Axis, CellCoord, CellId, ParsePositionError, Position, PositionId, Topology, TopologyError,
};
