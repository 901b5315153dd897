//! Property tests over random lines of play.

use proptest::prelude::*;

use conhex::{Game, Owner, Player, Position};

/// Play up to `picks.len()` moves, each choosing among the free positions
/// by index. Returns the states seen after every move, the initial state
/// first.
fn play_picks(game: &mut Game, picks: &[usize]) -> Vec<conhex::BoardState> {
    let mut states = vec![game.state().clone()];
    for &pick in picks {
        let free = game.free_positions();
        if free.is_empty() {
            break;
        }
        game.play(free[pick % free.len()]).unwrap();
        states.push(game.state().clone());
    }
    states
}

fn picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..69)
}

proptest! {
    /// Every cell is in exactly one ownership group.
    #[test]
    fn prop_ownership_partitions_cells(picks in picks()) {
        let mut game = Game::default();
        play_picks(&mut game, &picks);

        let ownership = game.ownership();
        let mut all: Vec<_> = Owner::ALL.iter().flat_map(|&o| ownership[o].clone()).collect();
        prop_assert_eq!(all.len(), 41);
        all.sort();
        all.dedup();
        prop_assert_eq!(all.len(), 41);
    }

    /// Claimed cells stay claimed by the same player as play goes on.
    #[test]
    fn prop_claims_are_final(picks in picks()) {
        let mut game = Game::default();
        let states = play_picks(&mut game, &picks);

        for pair in states.windows(2) {
            for (before, after) in pair[0].cell_owners().iter().zip(pair[1].cell_owners()) {
                if !before.is_empty() {
                    prop_assert_eq!(before, after);
                }
            }
        }
    }

    /// Undo restores the exact state before the last move.
    #[test]
    fn prop_undo_round_trip(picks in picks()) {
        let mut game = Game::default();
        let mut states = play_picks(&mut game, &picks);
        states.pop();

        if let Some(before) = states.pop() {
            game.undo();
            prop_assert_eq!(game.state(), &before);
        }
    }

    /// Turns alternate until someone wins, and every move uses one free position.
    #[test]
    fn prop_alternation_and_free_count(picks in picks()) {
        let mut game = Game::default();
        let states = play_picks(&mut game, &picks);

        for (n, state) in states.iter().enumerate() {
            if state.winner().is_some() {
                break;
            }
            prop_assert_eq!(state.current_player(), Player::to_move_after(n));
            prop_assert_eq!(state.free_position_ids().count(), 69 - n);
        }
    }

    /// Once set, the winner never changes.
    #[test]
    fn prop_winner_is_stable(picks in picks()) {
        let mut game = Game::default();
        let states = play_picks(&mut game, &picks);

        if let Some(first) = states.iter().position(|s| s.winner().is_some()) {
            let winner = states[first].winner();
            prop_assert!(states[first..].iter().all(|s| s.winner() == winner));
        }
        prop_assert_eq!(game.check_winner().is_some(), game.winner().is_some());
    }

    /// The same moves replayed give byte-identical snapshots.
    #[test]
    fn prop_replay_is_deterministic(picks in picks()) {
        let mut game = Game::default();
        play_picks(&mut game, &picks);
        let moves: Vec<String> = game.history().iter().map(Position::to_string).collect();
        let expected = game.snapshot().to_bytes().unwrap();

        let mut replayed = Game::default();
        replayed.replay(&moves).unwrap();
        prop_assert_eq!(replayed.snapshot().to_bytes().unwrap(), expected);
    }
}
