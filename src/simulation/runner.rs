//! Parallel batch execution
//!
//! Uses Rayon to run many independent games concurrently. Each game gets a
//! deterministic RNG derived from the base seed when one is set.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::config::{OutputMode, SimConfig};
use crate::game::Game;
use crate::player::{PlayStyle, Player};
use crate::result::{GameId, GameRecord};

/// Initialize the global Rayon pool with the given thread count.
/// Call this once at startup; 0 keeps Rayon's auto-detected default.
pub fn init_parallel(threads: usize) {
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .expect("Failed to initialize Rayon thread pool");
    }
}

/// Seat the table for one game. Seat 0 gets the special strategy.
pub fn build_players(config: &SimConfig) -> Vec<Player> {
    (0..config.players)
        .map(|seat| {
            let strategy = if seat == 0 {
                config.special_strategy
            } else {
                config.default_strategy
            };
            Player::new(
                format!("Player {}", seat + 1),
                config.starting_chips,
                seat,
                strategy,
            )
        })
        .collect()
}

/// Run the whole batch in parallel. Records come back in game-id order.
pub fn run_batch(config: &SimConfig, show_progress: bool) -> Vec<GameRecord> {
    let record_history = config.output == OutputMode::All;
    let strategies: Vec<PlayStyle> = (0..config.players)
        .map(|seat| {
            if seat == 0 {
                config.special_strategy
            } else {
                config.default_strategy
            }
        })
        .collect();
    let completed = AtomicUsize::new(0);

    (0..config.games)
        .into_par_iter()
        .map(|game_id| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game_id as u64)),
                None => StdRng::from_entropy(),
            };
            let outcome = Game::new(build_players(config), record_history).play(&mut rng);

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if show_progress && (done % 50 == 0 || done == config.games) {
                print_progress(done, config.games);
            }

            GameRecord {
                game_id: GameId::Number(game_id as i64),
                winner_name: outcome.winner.as_ref().map(|p| p.name.clone()),
                winner_strategy: outcome.winner.as_ref().map(|p| p.strategy),
                number_of_rounds: outcome.rounds,
                number_of_players: config.players as u32,
                initial_chips_per_player: config.starting_chips,
                all_player_strategies: strategies.clone(),
                draw: outcome.winner.is_none(),
                chip_history: record_history.then_some(outcome.chip_history),
            }
        })
        .collect()
}

/// Bar-style progress line, redrawn in place.
fn print_progress(done: usize, total: usize) {
    const BAR_WIDTH: usize = 70;
    let progress = done as f64 / total as f64;
    let pos = (BAR_WIDTH as f64 * progress) as usize;

    let mut line = String::with_capacity(BAR_WIDTH + 16);
    line.push('[');
    for i in 0..BAR_WIDTH {
        line.push(if i < pos {
            '='
        } else if i == pos {
            '>'
        } else {
            ' '
        });
    }
    line.push_str(&format!("] {} %\r", (progress * 100.0) as u32));
    print!("{line}");
    let _ = std::io::stdout().flush();
}
