//! Throughput benchmark: plays many games headless, cycling through the four
//! directions until each board locks up.

use std::time::Instant;

use rayon::prelude::*;
use twenty48::domain::{Direction, GridEngine, RandomSpawner, WIN_VALUE};

struct GameResult {
    moves: u64,
    score: u32,
    max_tile: u32,
    won: bool,
}

/// Play one game to the end. Directions are tried in a fixed rotation and a
/// rejected move falls through to the next one.
fn play_game(seed: u64) -> GameResult {
    let mut engine = GridEngine::new(Box::new(RandomSpawner::seeded(seed)));
    let mut moves = 0;
    let mut turn = 0;

    while !engine.is_game_over() {
        let moved = (0..Direction::ALL.len()).any(|offset| {
            let direction = Direction::ALL[(turn + offset) % Direction::ALL.len()];
            engine.shift(direction)
        });
        if !moved {
            break;
        }
        // Keep the tracker at its steady-state size, as a rendered game would
        engine.animations_mut().tick();
        moves += 1;
        turn += 1;
    }

    GameResult {
        moves,
        score: engine.score(),
        max_tile: engine.grid().max_tile(),
        won: engine.has_won(),
    }
}

fn benchmark(games: u64, parallel: bool) -> (f64, Vec<GameResult>) {
    let start = Instant::now();
    let results: Vec<GameResult> = if parallel {
        (0..games).into_par_iter().map(play_game).collect()
    } else {
        (0..games).map(play_game).collect()
    };
    (start.elapsed().as_secs_f64() * 1000.0, results)
}

fn main() {
    println!("=== 2048 Engine Benchmark ===\n");

    let sizes = [100, 1_000, 10_000];

    println!("{:>8} {:>12} {:>12} {:>14} {:>10}", "Games", "Serial ms", "Parallel ms", "Moves/sec", "Speedup");
    println!("{:-<60}", "");

    for games in sizes {
        let (serial_ms, _) = benchmark(games, false);
        let (parallel_ms, results) = benchmark(games, true);
        let moves: u64 = results.iter().map(|r| r.moves).sum();

        println!(
            "{:>8} {:>12.1} {:>12.1} {:>14.0} {:>9.1}x",
            games,
            serial_ms,
            parallel_ms,
            moves as f64 / (parallel_ms / 1000.0),
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Outcomes (10000 games) ===\n");

    let (_, results) = benchmark(10_000, true);
    let games = results.len() as f64;
    let mean_score = results.iter().map(|r| r.score as f64).sum::<f64>() / games;
    let mean_moves = results.iter().map(|r| r.moves as f64).sum::<f64>() / games;
    let best = results.iter().map(|r| r.max_tile).max().unwrap_or(0);
    let wins = results.iter().filter(|r| r.won).count();

    println!("Mean score:  {:>10.1}", mean_score);
    println!("Mean moves:  {:>10.1}", mean_moves);
    println!("Best tile:   {:>10}", best);
    println!("Reached {}: {:>9}", WIN_VALUE, wins);
}
