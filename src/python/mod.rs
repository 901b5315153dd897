//! Python bindings for the ConHex engine.
//!
//! # Quick Start
//!
//! ```python
//! import conhex
//!
//! game = conhex.ConhexGame("alice", "bob")
//! game.play("H5")
//! game.play("I7")
//!
//! print(game)                      # ASCII board
//! board = game.occupancy_numpy()   # int8 array, one entry per position
//!
//! winner = game.random_playout(seed=7)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// conhex: a ConHex game engine.
#[pymodule]
fn conhex(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyConhexGame>()?;
    Ok(())
}
