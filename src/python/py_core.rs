//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{MoveError, Player};
use crate::record::RecordError;

/// Python wrapper for Player.
#[pyclass(name = "Player")]
#[derive(Clone, Copy, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    /// Create a player from its number (1 or 2).
    #[new]
    fn new(number: u8) -> PyResult<Self> {
        match number {
            1 => Ok(Self(Player::Player1)),
            2 => Ok(Self(Player::Player2)),
            _ => Err(PyValueError::new_err(format!("no player {number}; expected 1 or 2"))),
        }
    }

    /// Player number, 1 or 2.
    #[getter]
    fn number(&self) -> u8 {
        self.0.index() as u8 + 1
    }

    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("Player({})", self.number())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

pub(crate) fn move_error(err: MoveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn record_error(err: RecordError) -> PyErr {
    match err {
        RecordError::Io { source, .. } => PyErr::from(source),
        other => PyValueError::new_err(other.to_string()),
    }
}
