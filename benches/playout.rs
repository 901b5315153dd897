//! Engine Benchmarks
//!
//! Random playouts, undo on long histories, and win detection.

use conhex::rules::find_winner;
use conhex::{random_playout, Game, GameRng, WinCheck};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A game played to the end by a fixed random line.
fn finished_game(seed: u64) -> Game {
    let mut game = Game::default();
    random_playout(&mut game, &mut GameRng::new(seed));
    game
}

/// A game with every position occupied.
fn full_board() -> Game {
    let mut game = finished_game(7);
    for position in game.free_positions() {
        black_box(game.play(position).is_ok());
    }
    game
}

fn bench_random_playout(c: &mut Criterion) {
    let mut rng = GameRng::new(42);

    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut game = Game::default();
            black_box(random_playout(&mut game, &mut rng))
        })
    });
}

fn bench_undo_long_history(c: &mut Criterion) {
    let game = full_board();
    let moves: Vec<String> = game.history().iter().map(ToString::to_string).collect();

    c.bench_function("undo_69_moves", |b| {
        b.iter_batched(
            || {
                let mut game = Game::default();
                black_box(game.replay(&moves).is_ok());
                game
            },
            |mut game| black_box(game.undo()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_win_check_full_board(c: &mut Criterion) {
    let game = full_board();

    c.bench_function("find_winner_full_board", |b| {
        b.iter(|| black_box(find_winner(game.topology(), game.state(), WinCheck::FullScan)))
    });

    c.bench_function("find_winner_full_board_heuristic", |b| {
        b.iter(|| {
            black_box(find_winner(
                game.topology(),
                game.state(),
                WinCheck::BorderHeuristic,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_random_playout,
    bench_undo_long_history,
    bench_win_check_full_board,
);
criterion_main!(benches);
