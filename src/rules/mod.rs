//! ConHex rules.
//!
//! - `conquest`: cell ownership updates after a move
//! - `win`: connectivity-based win detection
//! - `engine`: move validation, application and replay
//!
//! Everything here works on a [`crate::core::BoardState`] plus a shared
//! [`crate::topology::Topology`]; the rules never touch display names or
//! observers.

pub mod conquest;
pub mod engine;
pub mod win;

pub use conquest::{has_majority, update_cells, Conquered};
pub use engine::{apply_move, place, replay, validate, MoveOutcome, ReplayFailure};
pub use win::{border_heuristic_skips, connected_from, find_winner, is_connected};
