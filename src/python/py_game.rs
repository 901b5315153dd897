//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{GameConfig, GameRng, GameRngState, Player, WinCheck};
use crate::game::Game;
use crate::playout::random_playout;
use crate::record::GameRecord;

use super::py_core::{move_error, record_error, PyPlayer};

/// Python wrapper for Game.
///
/// Positions are passed as notation strings (`"H5"`). Random playouts draw
/// from a generator owned by the game, which can be saved and restored.
#[pyclass(name = "ConhexGame", unsendable)]
pub struct PyConhexGame {
    game: Game,
    rng: GameRng,
}

#[pymethods]
impl PyConhexGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player1, player2: display names
    /// - border_heuristic: use the historical quick-reject win check
    /// - seed: seed for random playouts
    #[new]
    #[pyo3(signature = (player1 = "Player 1", player2 = "Player 2", border_heuristic = false, seed = 42))]
    fn new(player1: &str, player2: &str, border_heuristic: bool, seed: u64) -> Self {
        let win_check = if border_heuristic {
            WinCheck::BorderHeuristic
        } else {
            WinCheck::FullScan
        };
        let config = GameConfig::new()
            .with_player_names(player1, player2)
            .with_win_check(win_check);
        Self {
            game: Game::new(config),
            rng: GameRng::new(seed),
        }
    }

    /// Play a position for the current player. Returns whether the game is won.
    fn play(&mut self, position: &str) -> PyResult<bool> {
        self.game.play_notation(position).map_err(move_error)
    }

    /// Undo the last move. Returns the position taken back, if any.
    fn undo(&mut self) -> Option<String> {
        self.game.undo().map(|p| p.to_string())
    }

    fn reset(&mut self) {
        self.game.reset();
    }

    /// Empty positions in canonical order.
    fn free_positions(&self) -> Vec<String> {
        self.game.free_positions().iter().map(ToString::to_string).collect()
    }

    /// Positions played, in order.
    fn history(&self) -> Vec<String> {
        self.game.history().iter().map(ToString::to_string).collect()
    }

    #[getter]
    fn current_player(&self) -> PyPlayer {
        PyPlayer(self.game.current_player())
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayer> {
        self.game.winner().map(PyPlayer)
    }

    #[getter]
    fn player_names(&self) -> (String, String) {
        let names = self.game.player_names();
        (
            names[Player::Player1].clone(),
            names[Player::Player2].clone(),
        )
    }

    /// Load a LittleGolem record file, replacing this game.
    fn load_record(&mut self, path: &str) -> PyResult<()> {
        self.game.load_file(path).map_err(record_error)
    }

    /// Load a record from its text.
    fn load_record_text(&mut self, content: &str) -> PyResult<()> {
        let record = GameRecord::parse(content).map_err(record_error)?;
        self.game.load_record(&record).map_err(record_error)
    }

    /// Play random moves until someone wins. Returns the winner.
    ///
    /// Passing a seed restarts the game's generator from it first.
    #[pyo3(signature = (seed = None))]
    fn random_playout(&mut self, seed: Option<u64>) -> Option<PyPlayer> {
        if let Some(seed) = seed {
            self.rng = GameRng::new(seed);
        }
        random_playout(&mut self.game, &mut self.rng).map(PyPlayer)
    }

    /// Serialized generator position, for `set_rng_state`.
    fn rng_state<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = bincode::serialize(&self.rng.state())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Resume random playouts from a position saved with `rng_state`.
    fn set_rng_state(&mut self, state: &[u8]) -> PyResult<()> {
        let state: GameRngState = bincode::deserialize(state)
            .map_err(|e| PyValueError::new_err(format!("invalid generator state: {e}")))?;
        self.rng = GameRng::from_state(&state);
        Ok(())
    }

    /// Occupancy per position in canonical order: 0 empty, 1 or 2.
    fn occupancy_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        let codes: Vec<i8> = self.game.state().occupancy().iter().map(|o| o.code()).collect();
        PyArray1::from_slice_bound(py, &codes)
    }

    /// Owner per cell in table order: 0 empty, 1 or 2.
    fn cell_owners_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        let codes: Vec<i8> = self.game.state().cell_owners().iter().map(|o| o.code()).collect();
        PyArray1::from_slice_bound(py, &codes)
    }

    /// The board with a status line.
    fn __str__(&self) -> String {
        format!("{:#}", self.game)
    }

    fn __repr__(&self) -> String {
        let status = match self.game.winner() {
            Some(player) => format!("won by {player}"),
            None => format!("{} to move", self.game.current_player()),
        };
        format!("ConhexGame(plies={}, {status})", self.game.state().ply_count())
    }
}
