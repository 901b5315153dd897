//! Random playouts.
//!
//! Plays uniformly random free positions until someone connects. Every
//! cell is claimed once the board is full, so with the full-scan win check
//! a playout always ends with a winner.

use tracing::debug;

use crate::core::{GameConfig, GameRng, Player, PlayerMap};
use crate::game::Game;
use crate::topology::PositionId;

/// Play random moves from the current position until the game is won or
/// the board is full. Returns the winner.
pub fn random_playout(game: &mut Game, rng: &mut GameRng) -> Option<Player> {
    let mut free: Vec<PositionId> = game.state().free_position_ids().collect();

    while game.winner().is_none() && !free.is_empty() {
        let id = free.swap_remove(rng.gen_index(free.len()));
        game.place(id);
    }

    debug!(
        winner = ?game.winner(),
        plies = game.state().ply_count(),
        "playout finished"
    );
    game.winner()
}

/// Win counts over `games` playouts from an empty board, each on its own
/// forked stream of `rng`.
pub fn playout_wins(config: &GameConfig, games: usize, rng: &mut GameRng) -> PlayerMap<usize> {
    let mut wins = PlayerMap::with_value(0);
    let mut game = Game::new(config.clone());

    for _ in 0..games {
        game.reset();
        let mut stream = rng.fork();
        if let Some(winner) = random_playout(&mut game, &mut stream) {
            wins[winner] += 1;
        }
    }

    wins
}
