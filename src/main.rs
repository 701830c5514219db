//! LCR strategy simulation
//!
//! Runs batches of LCR games and writes per-game results (with chip
//! history) to a JSON file for later analysis and visualization.
//!
//! Usage:
//!   cargo run --                                    # defaults: 4 players, 1000 games
//!   cargo run -- --players 6 --games 5000
//!   cargo run -- --special highest --default conditional
//!   cargo run -- --seed 42 --threads 8
//!   cargo run -- --totals                           # skip chip history
//!   cargo run -- --config sim.toml --out results.json

use std::path::{Path, PathBuf};
use std::process::exit;

use lcr::analytics::BatchStats;
use lcr::player::PlayStyle;
use lcr::result::write_records;
use lcr::simulation::{OutputMode, SimConfig, init_parallel, run_batch};

fn main() {
    let config = parse_args();
    if let Err(problem) = config.validate() {
        eprintln!("Invalid configuration: {problem}");
        exit(2);
    }
    init_parallel(config.threads);

    println!("LCR Strategy Simulation");
    println!("=======================");
    println!(
        "Started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{} players, {} games, {} starting chips",
        config.players, config.games, config.starting_chips
    );
    println!("Special strategy (Player 1): {}", config.special_strategy);
    println!("Default strategy (others):   {}", config.default_strategy);
    println!("\nRunning simulations...");

    let records = run_batch(&config, true);
    println!("\nSimulations complete. Total games run: {}", records.len());

    if let Err(err) = write_records(&config.out_path, &records) {
        eprintln!("{err}");
        exit(2);
    }
    println!("Results written to {}", config.out_path.display());

    let stats = BatchStats::from_records(&records);
    println!();
    print!("{}", stats.format_summary());
}

fn parse_args() -> SimConfig {
    let mut args = std::env::args().skip(1);
    let mut config = SimConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = PathBuf::from(expect_value(&mut args, &arg));
                config = SimConfig::load_toml(&path).unwrap_or_else(|err| {
                    eprintln!("{err}");
                    exit(2);
                });
            }
            "--players" => config.players = parse_number(&expect_value(&mut args, &arg), &arg),
            "--games" => config.games = parse_number(&expect_value(&mut args, &arg), &arg),
            "--chips" => {
                config.starting_chips = parse_number(&expect_value(&mut args, &arg), &arg)
            }
            "--special" => config.special_strategy = parse_strategy(&expect_value(&mut args, &arg)),
            "--default" => config.default_strategy = parse_strategy(&expect_value(&mut args, &arg)),
            "--seed" => config.seed = Some(parse_number(&expect_value(&mut args, &arg), &arg)),
            "--threads" => config.threads = parse_number(&expect_value(&mut args, &arg), &arg),
            "--totals" => config.output = OutputMode::Totals,
            "--out" => config.out_path = PathBuf::from(expect_value(&mut args, &arg)),
            "--help" | "-h" => {
                print_help();
                exit(0);
            }
            other => {
                eprintln!("Unknown flag: {other}");
                print_help();
                exit(2);
            }
        }
    }

    config
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    args.next().unwrap_or_else(|| {
        eprintln!("{flag} needs a value");
        exit(2);
    })
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("{flag}: invalid number {value:?}");
        exit(2);
    })
}

fn parse_strategy(value: &str) -> PlayStyle {
    PlayStyle::parse(value).unwrap_or_else(|| {
        eprintln!("Unknown strategy {value:?}. Choices:");
        for style in PlayStyle::ALL {
            eprintln!("  {}", style.label());
        }
        eprintln!("(short aliases: highest, lowest, opposite, conditional)");
        exit(2);
    })
}

fn print_help() {
    let default_out = Path::new(lcr::DEFAULT_RESULTS_PATH).display();
    println!("LCR strategy simulator");
    println!();
    println!("Options:");
    println!("  --players N     players per game (default 4)");
    println!("  --games N       games to simulate (default 1000)");
    println!("  --chips N       starting chips per player (default 3)");
    println!("  --special S     strategy for Player 1 (default conditional)");
    println!("  --default S     strategy for everyone else (default conditional)");
    println!("  --seed N        base RNG seed for reproducible runs");
    println!("  --threads N     worker threads (default: auto)");
    println!("  --totals        omit per-round chip history from records");
    println!("  --config PATH   load settings from a TOML file (later flags override)");
    println!("  --out PATH      results file (default {default_out})");
}
