//! Chip-history heatmap renderer
//!
//! Reads the simulation results JSON, picks one game, and renders its
//! per-turn, per-player chip counts as a heatmap PNG in the current
//! directory, named heatmap_game_{gameId}.png.
//!
//! Usage:
//!   cargo run --bin heatmap          # first game in the file
//!   cargo run --bin heatmap -- 3     # fourth game (zero-based index)
//!
//! Exits 0 on success, 1 when the selected record has no chip history,
//! and 2 on any other failure (missing file, bad JSON, index out of
//! range, ragged history).

use std::path::Path;
use std::process::exit;

use lcr::heatmap::{DEFAULT_RESULTS_PATH, HeatmapError, render_game_heatmap};

fn main() {
    let index = parse_index();

    match render_game_heatmap(Path::new(DEFAULT_RESULTS_PATH), index, Path::new(".")) {
        Ok(rendered) => {
            println!(
                "Saved {} ({} players x {} turns)",
                rendered.path.display(),
                rendered.players,
                rendered.turns
            );
            show_image(&rendered.path);
        }
        Err(HeatmapError::MissingChipHistory) => {
            println!("No chip history found in the data");
            exit(1);
        }
        Err(err) => {
            eprintln!("heatmap failed: {err}");
            exit(2);
        }
    }
}

/// Single optional positional argument: a zero-based game index.
/// Negative or non-integer values are rejected rather than wrapped.
fn parse_index() -> usize {
    let Some(arg) = std::env::args().nth(1) else {
        return 0;
    };
    arg.parse().unwrap_or_else(|_| {
        eprintln!("Invalid game index {arg:?}: expected a non-negative integer");
        exit(2);
    })
}

/// Best-effort interactive display; a no-op without a display.
fn show_image(path: &Path) {
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;
        let has_display = std::env::var_os("DISPLAY").is_some()
            || std::env::var_os("WAYLAND_DISPLAY").is_some();
        if has_display {
            let _ = Command::new("xdg-open").arg(path).spawn();
        }
    }
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        let _ = Command::new("open").arg(path).spawn();
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        let _ = path;
    }
}
