//! Core engine types: players and owners, board state, moves, errors,
//! configuration, RNG.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Move;
pub use config::{GameConfig, WinCheck};
pub use error::{MoveError, SnapshotError};
pub use player::{Owner, OwnerMap, Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{BoardState, Snapshot};
