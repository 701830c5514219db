//! Per-game result records and the results JSON file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::player::PlayStyle;

/// Game identifier as it appears in the results JSON. Opaque; used only for
/// labels and output filenames, substituted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(i64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Number(n) => write!(f, "{n}"),
            GameId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for GameId {
    fn from(n: i64) -> Self {
        GameId::Number(n)
    }
}

/// One game's recorded result.
///
/// Everything except `gameId` is optional on the way in, so the heatmap
/// renderer can read hand-written files carrying only `gameId` and
/// `chipHistory`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: GameId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_strategy: Option<PlayStyle>,
    #[serde(default)]
    pub number_of_rounds: u32,
    #[serde(default)]
    pub number_of_players: u32,
    #[serde(default)]
    pub initial_chips_per_player: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_player_strategies: Vec<PlayStyle>,
    #[serde(default)]
    pub draw: bool,
    /// Chip counts per turn, one inner entry per player. Absence is valid;
    /// it means the run was made with history recording off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip_history: Option<Vec<Vec<u32>>>,
}

/// Failures reading or writing a results file.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Load a whole results file into memory.
pub fn load_records(path: &Path) -> Result<Vec<GameRecord>, ResultsError> {
    let contents = fs::read_to_string(path).map_err(|source| ResultsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ResultsError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Write records as a pretty-printed JSON array, creating parent
/// directories as needed.
pub fn write_records(path: &Path, records: &[GameRecord]) -> Result<(), ResultsError> {
    let wrap = |source| ResultsError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }

    let json = serde_json::to_string_pretty(records).expect("records serialize to JSON");
    fs::write(path, json).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_parses() {
        let json = r#"[{ "gameId": 7, "chipHistory": [[10,20],[15,18],[5,25]] }]"#;
        let records: Vec<GameRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].game_id, GameId::Number(7));
        let history = records[0].chip_history.as_ref().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], vec![10, 20]);
        assert!(!records[0].draw);
    }

    #[test]
    fn test_game_id_accepts_strings() {
        let json = r#"{ "gameId": "run-42" }"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.game_id.to_string(), "run-42");
        assert!(record.chip_history.is_none());
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = GameRecord {
            game_id: GameId::Number(3),
            winner_name: Some("Player 2".into()),
            winner_strategy: Some(PlayStyle::StealFromHighest),
            number_of_rounds: 17,
            number_of_players: 4,
            initial_chips_per_player: 3,
            all_player_strategies: vec![PlayStyle::StealFromHighest; 4],
            draw: false,
            chip_history: Some(vec![vec![3, 3, 3, 3], vec![2, 4, 3, 3]]),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"gameId\":3"));
        assert!(json.contains("\"winnerStrategy\":\"Steal From Highest\""));

        let back: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.number_of_rounds, 17);
        assert_eq!(back.chip_history, record.chip_history);
    }

    #[test]
    fn test_history_omitted_when_absent() {
        let record = GameRecord {
            game_id: GameId::Number(0),
            winner_name: None,
            winner_strategy: None,
            number_of_rounds: 0,
            number_of_players: 2,
            initial_chips_per_player: 3,
            all_player_strategies: Vec::new(),
            draw: true,
            chip_history: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("chipHistory"));
    }

    #[test]
    fn test_load_and_write_round_trip() {
        let dir = std::env::temp_dir().join("lcr_result_tests");
        let path = dir.join("round_trip.json");
        let records = vec![GameRecord {
            game_id: GameId::Number(1),
            winner_name: Some("Player 1".into()),
            winner_strategy: Some(PlayStyle::StealFromLowest),
            number_of_rounds: 5,
            number_of_players: 2,
            initial_chips_per_player: 3,
            all_player_strategies: vec![PlayStyle::StealFromLowest; 2],
            draw: false,
            chip_history: Some(vec![vec![3, 3], vec![1, 4]]),
        }];

        write_records(&path, &records).unwrap();
        let back = load_records(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].winner_name.as_deref(), Some("Player 1"));

        let missing = load_records(&dir.join("does_not_exist.json"));
        assert!(matches!(missing, Err(ResultsError::Read { .. })));
    }
}
