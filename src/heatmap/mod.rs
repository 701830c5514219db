//! Chip-history heatmap pipeline
//!
//! Load the results JSON, select one game by index, transpose its chip
//! history so players become rows and turns become columns, render, save.

mod matrix;
mod render;

pub use matrix::{ChipMatrix, ShapeError};
pub use render::{load_label_font, render_heatmap, warm_color};

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::result::{ResultsError, load_records};

/// Results file written by the simulator and read by the `heatmap` bin.
pub const DEFAULT_RESULTS_PATH: &str = "build/lcr_simulation_results.json";

/// Failures along the render pipeline.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error(transparent)]
    Results(#[from] ResultsError),
    #[error("game index {index} is out of range ({len} records)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("selected record has no chip history")]
    MissingChipHistory,
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A successfully rendered heatmap.
#[derive(Debug)]
pub struct RenderedHeatmap {
    /// Where the PNG landed.
    pub path: PathBuf,
    pub game_id: String,
    /// Heatmap rows.
    pub players: usize,
    /// Heatmap columns.
    pub turns: usize,
}

/// Render one game's chip history from `results_path` into
/// `out_dir/heatmap_game_{gameId}.png`.
pub fn render_game_heatmap(
    results_path: &Path,
    index: usize,
    out_dir: &Path,
) -> Result<RenderedHeatmap, HeatmapError> {
    let records = load_records(results_path)?;
    let record = records.get(index).ok_or(HeatmapError::IndexOutOfRange {
        index,
        len: records.len(),
    })?;
    let history = record
        .chip_history
        .as_ref()
        .ok_or(HeatmapError::MissingChipHistory)?;

    // chipHistory is turns x players; display wants players as rows.
    let by_player = ChipMatrix::from_rows(history)?.transpose();

    let title = format!("Chip Distribution - Game {}", record.game_id);
    let img = render_heatmap(&by_player, &title);

    let path = out_dir.join(format!("heatmap_game_{}.png", record.game_id));
    img.save(&path).map_err(|source| HeatmapError::Save {
        path: path.clone(),
        source,
    })?;

    Ok(RenderedHeatmap {
        path,
        game_id: record.game_id.to_string(),
        players: by_player.rows(),
        turns: by_player.cols(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lcr_heatmap_{tag}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_renders_two_player_history() {
        let dir = temp_dir("scenario");
        let results = dir.join("results.json");
        fs::write(
            &results,
            r#"[{ "gameId": 7, "chipHistory": [[10,20],[15,18],[5,25]] }]"#,
        )
        .unwrap();

        let rendered = render_game_heatmap(&results, 0, &dir).unwrap();
        assert_eq!(rendered.game_id, "7");
        assert_eq!(rendered.players, 2);
        assert_eq!(rendered.turns, 3);
        assert_eq!(
            rendered.path.file_name().unwrap().to_str().unwrap(),
            "heatmap_game_7.png"
        );
        assert!(rendered.path.exists());

        // The saved file is a decodable PNG.
        let img = image::open(&rendered.path).unwrap();
        assert!(img.width() > 0 && img.height() > 0);
    }

    #[test]
    fn test_missing_chip_history() {
        let dir = temp_dir("no_history");
        let results = dir.join("results.json");
        fs::write(&results, r#"[{ "gameId": 12, "draw": false }]"#).unwrap();

        let err = render_game_heatmap(&results, 0, &dir).unwrap_err();
        assert!(matches!(err, HeatmapError::MissingChipHistory));
        assert!(!dir.join("heatmap_game_12.png").exists());
    }

    #[test]
    fn test_index_out_of_range() {
        let dir = temp_dir("oob");
        let results = dir.join("results.json");
        fs::write(&results, r#"[{ "gameId": 1, "chipHistory": [[3,3]] }]"#).unwrap();

        let err = render_game_heatmap(&results, 1, &dir).unwrap_err();
        match err {
            HeatmapError::IndexOutOfRange { index, len } => {
                assert_eq!(index, 1);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_index_selects_matching_record() {
        let dir = temp_dir("select");
        let results = dir.join("results.json");
        fs::write(
            &results,
            r#"[
                { "gameId": "a", "chipHistory": [[3,3]] },
                { "gameId": "b", "chipHistory": [[1,2],[2,1]] }
            ]"#,
        )
        .unwrap();

        let rendered = render_game_heatmap(&results, 1, &dir).unwrap();
        assert_eq!(rendered.game_id, "b");
        assert!(dir.join("heatmap_game_b.png").exists());
        assert_eq!(rendered.turns, 2);
    }

    #[test]
    fn test_ragged_history_is_rejected() {
        let dir = temp_dir("ragged");
        let results = dir.join("results.json");
        fs::write(&results, r#"[{ "gameId": 2, "chipHistory": [[1,2],[3]] }]"#).unwrap();

        let err = render_game_heatmap(&results, 0, &dir).unwrap_err();
        assert!(matches!(err, HeatmapError::Shape(ShapeError::Ragged { .. })));
    }

    #[test]
    fn test_missing_file_is_a_results_error() {
        let dir = temp_dir("missing_file");
        let err = render_game_heatmap(&dir.join("nope.json"), 0, &dir).unwrap_err();
        assert!(matches!(err, HeatmapError::Results(_)));
    }
}
