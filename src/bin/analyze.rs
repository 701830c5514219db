//! Analyze a simulation results file
//!
//! Prints per-strategy win counts and round statistics for a results JSON
//! written by the simulator.
//!
//! Usage:
//!   cargo run --bin analyze
//!   cargo run --bin analyze -- path/to/results.json

use std::path::PathBuf;
use std::process::exit;

use lcr::analytics::BatchStats;
use lcr::heatmap::DEFAULT_RESULTS_PATH;
use lcr::result::load_records;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH));

    println!("Analyzing {}...", path.display());
    let records = match load_records(&path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("{err}");
            exit(2);
        }
    };

    if records.is_empty() {
        println!("No games in {}", path.display());
        println!("\nTo generate results, run the simulator first:");
        println!("  cargo run -- --games 1000");
        return;
    }

    let stats = BatchStats::from_records(&records);
    println!("============================================================");
    print!("{}", stats.format_summary());

    let with_history = records
        .iter()
        .filter(|r| r.chip_history.is_some())
        .count();
    println!(
        "Chip history present in {}/{} records",
        with_history,
        records.len()
    );
}
