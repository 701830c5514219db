//! Batch simulation: configuration and parallel execution

mod config;
mod runner;

pub use config::{ConfigError, OutputMode, SimConfig};
pub use runner::{build_players, init_parallel, run_batch};
