//! The game controller.
//!
//! `Game` binds a shared [`Topology`], a [`GameConfig`], the mutable
//! [`BoardState`] and any registered observers. It is the only type most
//! hosts need:
//!
//! ```
//! use conhex::{Game, GameConfig, Player};
//!
//! let mut game = Game::new(GameConfig::new().with_player_names("alice", "bob"));
//! assert_eq!(game.play_notation("H5"), Ok(false));
//! assert_eq!(game.current_player(), Player::Player2);
//!
//! game.undo();
//! assert_eq!(game.free_positions().len(), 69);
//! ```

pub mod observer;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::core::{BoardState, GameConfig, Move, MoveError, Owner, OwnerMap, Player, PlayerMap, Snapshot};
use crate::record::{GameRecord, RecordError};
use crate::render::{render_board, render_with_status};
use crate::rules::engine::{self, ReplayFailure};
use crate::rules::win;
use crate::topology::{CellCoord, Position, PositionId, Topology};

pub use observer::{GameEvent, GameObserver, TracingObserver};

/// A ConHex game.
pub struct Game {
    topology: Arc<Topology>,
    config: GameConfig,
    state: BoardState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// New game on the published ConHex board.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_topology(Topology::conhex(), config)
    }

    /// New game on a custom topology.
    #[must_use]
    pub fn with_topology(topology: Arc<Topology>, config: GameConfig) -> Self {
        let state = BoardState::new(&topology);
        Self {
            topology,
            config,
            state,
            observers: Vec::new(),
        }
    }

    /// New game replaying a record. Names come from the record.
    pub fn from_record(record: &GameRecord, config: GameConfig) -> Result<Self, RecordError> {
        let mut game = Self::new(config);
        game.load_record(record)?;
        Ok(game)
    }

    #[must_use]
    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The underlying state, indexed by ids.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Register an observer; it sees every later event.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // === Moves ===

    /// Play `position` for the current player. Returns whether the game is
    /// won after the move. The game is unchanged on error.
    ///
    /// Playing on after a win is allowed; the winner stays fixed.
    #[instrument(level = "debug", skip(self, position), fields(position = %position))]
    pub fn play(&mut self, position: Position) -> Result<bool, MoveError> {
        let id = engine::validate(&self.topology, &self.state, position)?;
        Ok(self.place(id))
    }

    /// Play an empty position by id and report it to observers.
    pub(crate) fn place(&mut self, id: PositionId) -> bool {
        let outcome = engine::place(&self.topology, &mut self.state, id, self.config.win_check);
        debug!(
            player = %outcome.player,
            conquered = outcome.conquered.len(),
            won = outcome.won,
            "move applied"
        );

        if self.observers.is_empty() {
            return outcome.won;
        }

        self.emit(GameEvent::MoveApplied {
            ply: self.state.ply_count() - 1,
            player: outcome.player,
            position: self.topology.position(id),
        });
        for &cell in &outcome.conquered {
            let cell = self.topology.cell(cell).coord();
            self.emit(GameEvent::CellConquered {
                cell,
                player: outcome.player,
            });
        }
        if outcome.decided {
            self.emit(GameEvent::GameWon { player: outcome.player });
        }

        outcome.won
    }

    /// Parse `notation` (e.g. `"H5"`) and play it.
    pub fn play_notation(&mut self, notation: &str) -> Result<bool, MoveError> {
        let position = notation.parse::<Position>().map_err(|_| MoveError::InvalidPosition {
            notation: notation.to_string(),
        })?;
        self.play(position)
    }

    /// Take back the last move by replaying the rest of the history.
    /// Returns the position taken back, or `None` with an empty history.
    pub fn undo(&mut self) -> Option<Position> {
        let mut history = self.state.history().clone();
        let last = history.pop_back()?;

        self.state = engine::replay_history(&self.topology, history, self.config.win_check);

        let position = self.topology.position(last);
        self.emit(GameEvent::MoveUndone { position });
        Some(position)
    }

    /// Clear the board. Player names are kept.
    pub fn reset(&mut self) {
        self.state = BoardState::new(&self.topology);
        self.emit(GameEvent::Reset);
    }

    /// Replace the board with `moves` played in order from an empty board.
    /// Returns whether the game is won.
    ///
    /// The moves are replayed on a fresh board first; if one is illegal the
    /// game keeps its previous state.
    pub fn replay<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<bool, ReplayFailure> {
        self.state = engine::replay(&self.topology, moves, self.config.win_check)?;
        self.emit(GameEvent::Loaded { moves: moves.len() });
        Ok(self.state.winner().is_some())
    }

    // === Queries ===

    /// Empty positions in canonical order.
    #[must_use]
    pub fn free_positions(&self) -> Vec<Position> {
        self.state
            .free_position_ids()
            .map(|id| self.topology.position(id))
            .collect()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Run the win detector on the current board without changing anything.
    #[must_use]
    pub fn check_winner(&self) -> Option<Player> {
        win::find_winner(&self.topology, &self.state, self.config.win_check)
    }

    /// Positions played, in order.
    #[must_use]
    pub fn history(&self) -> Vec<Position> {
        self.state
            .history()
            .iter()
            .map(|&id| self.topology.position(id))
            .collect()
    }

    /// Moves played, with their players.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.snapshot().moves
    }

    /// Occupant of `position`, or `None` if it is not on the board.
    #[must_use]
    pub fn occupancy(&self, position: Position) -> Option<Owner> {
        self.topology
            .position_id(position)
            .map(|id| self.state.occupant(id))
    }

    /// Owner of the cell at `coord`, or `None` if there is no such cell.
    #[must_use]
    pub fn cell_owner(&self, coord: CellCoord) -> Option<Owner> {
        self.topology.cell_id(coord).map(|id| self.state.cell_owner(id))
    }

    /// Cells owned by `owner` (`Owner::Empty` for unclaimed cells).
    #[must_use]
    pub fn cells_owned_by(&self, owner: Owner) -> Vec<CellCoord> {
        self.state
            .cells_owned_by(owner)
            .map(|id| self.topology.cell(id).coord())
            .collect()
    }

    /// Every cell, grouped by owner.
    #[must_use]
    pub fn ownership(&self) -> OwnerMap<Vec<CellCoord>> {
        OwnerMap::new(|owner| self.cells_owned_by(owner))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(&self.topology, &self.config.player_names)
    }

    // === Names ===

    #[must_use]
    pub fn player_name(&self, player: Player) -> &str {
        &self.config.player_names[player]
    }

    #[must_use]
    pub fn player_names(&self) -> &PlayerMap<String> {
        &self.config.player_names
    }

    pub fn set_player_names(&mut self, player1: impl Into<String>, player2: impl Into<String>) {
        self.config.player_names[Player::Player1] = player1.into();
        self.config.player_names[Player::Player2] = player2.into();
    }

    // === Records ===

    /// Replace this game with the one in `record`.
    ///
    /// The moves are replayed on a fresh board first; on any error the game
    /// keeps its previous state and names.
    #[instrument(level = "debug", skip_all, fields(moves = record.moves.len()))]
    pub fn load_record(&mut self, record: &GameRecord) -> Result<(), RecordError> {
        let state = engine::replay(&self.topology, &record.moves, self.config.win_check)
            .map_err(|failure| RecordError::Replay {
                ply: failure.ply,
                source: failure.error,
            })?;

        self.state = state;
        self.config.player_names = record.player_names.clone();

        info!(
            player1 = %self.config.player_names[Player::Player1],
            player2 = %self.config.player_names[Player::Player2],
            moves = record.moves.len(),
            "loaded game record"
        );
        self.emit(GameEvent::Loaded {
            moves: record.moves.len(),
        });
        Ok(())
    }

    /// Read a record file and load it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        let record = GameRecord::from_file(path)?;
        self.load_record(&record)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// `{}` draws the board; `{:#}` adds a status line below it.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        if f.alternate() {
            render_with_status(f, &snapshot)
        } else {
            f.write_str(&render_board(&snapshot))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording_game() -> (Game, Rc<RefCell<Vec<GameEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut game = Game::default();
        game.add_observer(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));
        (game, events)
    }

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_move_events() {
        let (mut game, events) = recording_game();
        game.play_notation("B3").unwrap();
        game.play_notation("H5").unwrap();
        game.play_notation("B4").unwrap();

        let events = events.borrow();
        assert_eq!(
            events.last(),
            Some(&GameEvent::CellConquered {
                cell: CellCoord::new(1, 3),
                player: Player::Player1,
            })
        );
        assert_eq!(
            events[2],
            GameEvent::MoveApplied {
                ply: 2,
                player: Player::Player1,
                position: pos("B4"),
            }
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_failed_move_emits_nothing() {
        let (mut game, events) = recording_game();
        assert!(game.play_notation("Z1").is_err());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_undo_and_reset_events() {
        let (mut game, events) = recording_game();
        game.play_notation("F6").unwrap();
        game.play_notation("E6").unwrap();
        assert_eq!(game.undo(), Some(pos("E6")));
        game.reset();
        assert_eq!(game.undo(), None);

        let events = events.borrow();
        assert_eq!(events[2], GameEvent::MoveUndone { position: pos("E6") });
        assert_eq!(events[3], GameEvent::Reset);
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_load_emits_single_event() {
        let (mut game, events) = recording_game();
        let record = GameRecord {
            player_names: PlayerMap::new(|p| format!("{p}!")),
            moves: vec!["H5".into(), "I7".into(), "H7".into()],
        };
        game.load_record(&record).unwrap();

        assert_eq!(*events.borrow(), vec![GameEvent::Loaded { moves: 3 }]);
        assert_eq!(game.player_name(Player::Player2), "Player 2!");
    }

    #[test]
    fn test_replay_is_atomic() {
        let (mut game, events) = recording_game();
        game.play_notation("F6").unwrap();
        let before = game.state().clone();
        events.borrow_mut().clear();

        let failure = game.replay(&["B3", "H5", "B4", "B3"]).unwrap_err();
        assert_eq!(failure.ply, 3);
        assert_eq!(game.state(), &before);
        assert!(events.borrow().is_empty());

        assert!(!game.replay(&["B3", "H5"]).unwrap());
        assert_eq!(game.history(), vec![pos("B3"), pos("H5")]);
        assert_eq!(*events.borrow(), vec![GameEvent::Loaded { moves: 2 }]);
    }

    #[test]
    fn test_queries_use_board_coordinates() {
        let mut game = Game::default();
        game.play_notation("B3").unwrap();
        game.play_notation("K11").unwrap();
        game.play_notation("B4").unwrap();

        assert_eq!(game.occupancy(pos("B3")), Some(Owner::Player1));
        assert_eq!(game.occupancy(pos("K11")), Some(Owner::Player2));
        assert_eq!(game.occupancy(pos("A2")), None);
        assert_eq!(game.cell_owner(CellCoord::new(1, 3)), Some(Owner::Player1));
        assert_eq!(game.cell_owner(CellCoord::new(2, 3)), None);
        assert_eq!(game.cells_owned_by(Owner::Player1), vec![CellCoord::new(1, 3)]);
        assert_eq!(game.history(), vec![pos("B3"), pos("K11"), pos("B4")]);
        assert_eq!(game.moves()[1].player, Player::Player2);
    }

    #[test]
    fn test_display_matches_snapshot() {
        let mut game = Game::default();
        game.play_notation("F6").unwrap();
        assert_eq!(game.to_string(), game.snapshot().to_string());
        assert!(format!("{game:?}").contains("observers: 0"));

        let with_status = format!("{game:#}");
        assert!(with_status.starts_with(&game.to_string()));
        assert!(with_status.ends_with("Player 2 (Player 2) to move\n"));
    }
}
