//! Move engine: validates moves, applies them to a [`BoardState`], and
//! rebuilds states by replaying histories.
//!
//! Applying a move:
//! 1. the position must be on the board and empty
//! 2. the mover's stone is placed and the move is appended to the history
//! 3. cells around the position are re-evaluated ([`conquest`])
//! 4. if nobody has won yet, the win detector runs ([`win`])
//! 5. the turn passes to the opponent unless the game is now won

use tracing::{debug, instrument};

use super::conquest::{self, Conquered};
use super::win;
use crate::core::{BoardState, MoveError, Owner, Player, WinCheck};
use crate::topology::{Position, PositionId, Topology};

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The position played.
    pub position: PositionId,

    /// The player who moved.
    pub player: Player,

    /// Cells claimed by this move.
    pub conquered: Conquered,

    /// This move decided the game.
    pub decided: bool,

    /// The game has a winner (possibly decided earlier).
    pub won: bool,
}

/// Check that `position` can be played and return its id.
pub fn validate(topology: &Topology, state: &BoardState, position: Position) -> Result<PositionId, MoveError> {
    let id = topology
        .position_id(position)
        .ok_or_else(|| MoveError::InvalidPosition {
            notation: position.to_string(),
        })?;

    match state.occupant(id) {
        Owner::Empty => Ok(id),
        owner => Err(MoveError::PositionOccupied { position, owner }),
    }
}

/// Place the current player's stone on an empty position.
///
/// The caller guarantees `id` is empty (see [`validate`]).
pub fn place(topology: &Topology, state: &mut BoardState, id: PositionId, strategy: WinCheck) -> MoveOutcome {
    debug_assert!(state.occupant(id).is_empty(), "placing on an occupied position");

    let player = state.current_player;
    state.set_occupant(id, Owner::from(player));
    state.push_history(id);

    let conquered = conquest::update_cells(topology, state, id);

    let mut decided = false;
    if state.winner.is_none() {
        if let Some(winner) = win::find_winner(topology, state, strategy) {
            state.winner = Some(winner);
            decided = true;
        }
    }

    if state.winner.is_none() {
        state.current_player = player.opponent();
    }

    MoveOutcome {
        position: id,
        player,
        conquered,
        decided,
        won: state.winner.is_some(),
    }
}

/// Validate and apply a move. The state is unchanged on error.
#[instrument(level = "debug", skip(topology, state, position), fields(position = %position))]
pub fn apply_move(
    topology: &Topology,
    state: &mut BoardState,
    position: Position,
    strategy: WinCheck,
) -> Result<MoveOutcome, MoveError> {
    let id = validate(topology, state, position)?;
    let outcome = place(topology, state, id, strategy);
    debug!(
        player = %outcome.player,
        conquered = outcome.conquered.len(),
        won = outcome.won,
        "move applied"
    );
    Ok(outcome)
}

/// Rebuild a state from an empty board by replaying ids from a history.
///
/// Ids from a real history are distinct, so every placement is legal.
pub(crate) fn replay_history<I>(topology: &Topology, history: I, strategy: WinCheck) -> BoardState
where
    I: IntoIterator<Item = PositionId>,
{
    let mut state = BoardState::new(topology);
    for id in history {
        place(topology, &mut state, id, strategy);
    }
    state
}

/// A move in a replayed sequence failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayFailure {
    /// Zero-based index of the failing move.
    pub ply: usize,
    pub error: MoveError,
}

/// Replay notated moves on an empty board, failing on the first illegal one.
pub fn replay<S: AsRef<str>>(
    topology: &Topology,
    moves: &[S],
    strategy: WinCheck,
) -> Result<BoardState, ReplayFailure> {
    let mut state = BoardState::new(topology);

    for (ply, notation) in moves.iter().enumerate() {
        let notation = notation.as_ref();
        let result = notation
            .parse::<Position>()
            .map_err(|_| MoveError::InvalidPosition {
                notation: notation.to_string(),
            })
            .and_then(|position| apply_move(topology, &mut state, position, strategy));

        if let Err(error) = result {
            return Err(ReplayFailure { ply, error });
        }
    }

    Ok(state)
}
