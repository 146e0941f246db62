//! Configuration
//!
//! Layered configuration for the keeper: built-in defaults, the global TOML
//! file, then `CODETREE_KEEPER_*` environment variables.

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Files remembered when `max_history` is missing or invalid
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Name of the state file inside the data directory
pub const STATE_FILE_NAME: &str = "unfolded.json";

/// Keeper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperConfig {
    /// Maximum number of files whose fold state is remembered.
    ///
    /// Parsed separately from the rest so an invalid value falls back to
    /// [`DEFAULT_MAX_HISTORY`] instead of failing the load.
    #[serde(skip_deserializing)]
    pub max_history: usize,

    /// Location of the persisted fold state; None means the XDG data directory
    pub state_file: Option<PathBuf>,

    /// Delay before replaying after the outline is cleared
    pub after_clear_delay_ms: u64,

    pub logging: LoggingConfig,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            state_file: None,
            after_clear_delay_ms: 0,
            logging: LoggingConfig::default(),
        }
    }
}

impl KeeperConfig {
    /// Resolve the state file location, defaulting to
    /// `$XDG_DATA_HOME/codetree-keeper/unfolded.json`.
    pub fn state_file_path(&self) -> Result<PathBuf, ApiError> {
        if let Some(path) = &self.state_file {
            return Ok(path.clone());
        }
        Ok(xdg::keeper_data_dir()?.join(STATE_FILE_NAME))
    }

    pub fn after_clear_delay(&self) -> Duration {
        Duration::from_millis(self.after_clear_delay_ms)
    }
}

/// Parse the raw `max_history` setting, falling back to the default.
pub fn resolve_max_history(raw: Option<&str>) -> usize {
    let raw = match raw {
        Some(raw) => raw.trim(),
        None => return DEFAULT_MAX_HISTORY,
    };
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!(
                "Invalid max_history {:?}, using default {}",
                raw,
                DEFAULT_MAX_HISTORY
            );
            DEFAULT_MAX_HISTORY
        }
    }
}
