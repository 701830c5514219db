//! LCR - a Left-Center-Right dice game strategy simulator
//!
//! This crate simulates batches of LCR games between players with different
//! steal strategies, records the results (including per-turn chip counts) to
//! a JSON file, and renders a game's chip history as a heatmap image.

pub mod analytics;
pub mod dice;
pub mod game;
pub mod heatmap;
pub mod player;
pub mod result;
pub mod simulation;

// Re-export commonly used types for convenience
pub use analytics::BatchStats;
pub use dice::DiceFace;
pub use game::{Direction, Game, GameOutcome, MAX_ROUNDS, neighbor_index};
pub use heatmap::{
    ChipMatrix, DEFAULT_RESULTS_PATH, HeatmapError, RenderedHeatmap, ShapeError,
    render_game_heatmap,
};
pub use player::{PlayStyle, Player, choose_steal_target};
pub use result::{GameId, GameRecord, ResultsError, load_records, write_records};
pub use simulation::{OutputMode, SimConfig, init_parallel, run_batch};
