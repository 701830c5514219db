//! Simulation configuration, from CLI flags and/or a TOML file

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::heatmap::DEFAULT_RESULTS_PATH;
use crate::player::PlayStyle;

/// What goes into each record: `all` includes per-round chip history,
/// `totals` keeps only the end-of-game fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    All,
    Totals,
}

impl OutputMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "all" => Some(OutputMode::All),
            "totals" => Some(OutputMode::Totals),
            _ => None,
        }
    }
}

/// One batch run. Player 1 (seat 0) plays the special strategy, everyone
/// else the default strategy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub players: usize,
    pub games: usize,
    /// Strategy names in config files use the full labels,
    /// e.g. `"Steal From Highest"`.
    pub special_strategy: PlayStyle,
    pub default_strategy: PlayStyle,
    pub starting_chips: u32,
    /// Base RNG seed; each game derives its own. Unset means entropy.
    pub seed: Option<u64>,
    /// Worker threads; 0 lets Rayon auto-detect.
    pub threads: usize,
    pub output: OutputMode,
    pub out_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 4,
            games: 1000,
            special_strategy: PlayStyle::StealOppositeConditional,
            default_strategy: PlayStyle::StealOppositeConditional,
            starting_chips: 3,
            seed: None,
            threads: 0,
            output: OutputMode::All,
            out_path: PathBuf::from(DEFAULT_RESULTS_PATH),
        }
    }
}

/// Failures loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl SimConfig {
    pub fn load_toml(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Reject configurations the game rules cannot run.
    pub fn validate(&self) -> Result<(), String> {
        if self.players < 2 {
            return Err(format!("players must be >= 2, got {}", self.players));
        }
        if self.games == 0 {
            return Err("games must be >= 1".into());
        }
        if self.starting_chips == 0 {
            return Err("starting_chips must be >= 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.players, 4);
        assert_eq!(config.starting_chips, 3);
        assert_eq!(config.output, OutputMode::All);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
players = 6
games = 250
special_strategy = "Steal From Highest"
output = "totals"
seed = 42
"#;
        let config: SimConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.players, 6);
        assert_eq!(config.games, 250);
        assert_eq!(config.special_strategy, PlayStyle::StealFromHighest);
        // Unspecified fields keep their defaults.
        assert_eq!(config.default_strategy, PlayStyle::StealOppositeConditional);
        assert_eq!(config.output, OutputMode::Totals);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<SimConfig, _> = toml::from_str("playerz = 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        let mut config = SimConfig::default();
        config.players = 1;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.games = 0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.starting_chips = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_mode_parse() {
        assert_eq!(OutputMode::parse("all"), Some(OutputMode::All));
        assert_eq!(OutputMode::parse("Totals"), Some(OutputMode::Totals));
        assert_eq!(OutputMode::parse("everything"), None);
    }
}
