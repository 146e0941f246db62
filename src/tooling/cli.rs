//! CLI Tooling
//!
//! Command-line interface over the persisted fold state: list what is
//! remembered, inspect or forget one file, clear everything, and print the
//! effective configuration.

use crate::config::{ConfigLoader, KeeperConfig};
use crate::error::ApiError;
use crate::store::persistence::FoldStatePersistence;
use crate::types::file_key;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Codetree Keeper CLI - inspect remembered outline fold state
#[derive(Parser)]
#[command(name = "codetree-keeper")]
#[command(about = "Inspect and prune remembered code-tree fold state")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List remembered files, oldest first
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the unfolded paths remembered for a file
    Show {
        /// File whose outline state to show
        file: PathBuf,
    },
    /// Forget the remembered state of one file
    Forget {
        /// File whose outline state to drop
        file: PathBuf,
    },
    /// Delete all remembered state
    Clear,
    /// Print the effective configuration
    Config,
}

/// CLI execution context
pub struct CliContext {
    config: KeeperConfig,
    persistence: FoldStatePersistence,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Self::with_config(config)
    }

    pub fn with_config(config: KeeperConfig) -> Result<Self, ApiError> {
        let persistence = FoldStatePersistence::new(config.state_file_path()?, config.max_history);
        Ok(Self {
            config,
            persistence,
        })
    }

    pub fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// Execute a command and return its printable output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { format } => self.handle_list(format),
            Commands::Show { file } => self.handle_show(file),
            Commands::Forget { file } => self.handle_forget(file),
            Commands::Clear => self.handle_clear(),
            Commands::Config => self.handle_config(),
        }
    }

    fn handle_list(&self, format: &str) -> Result<String, ApiError> {
        let store = self.persistence.load()?;
        match format {
            "json" => {
                let files: Vec<_> = store
                    .iter()
                    .map(|(key, snapshot)| {
                        json!({
                            "file": key.display().to_string(),
                            "unfolded": snapshot.len(),
                        })
                    })
                    .collect();
                serde_json::to_string_pretty(&files)
                    .map_err(|e| ApiError::ConfigError(format!("Failed to format output: {}", e)))
            }
            "text" => {
                if store.is_empty() {
                    return Ok("No remembered files.".to_string());
                }
                use comfy_table::Table;
                let mut table = Table::new();
                table.load_preset(comfy_table::presets::UTF8_FULL);
                table.set_header(vec!["#", "File", "Unfolded"]);
                for (i, (key, snapshot)) in store.iter().enumerate() {
                    table.add_row(vec![
                        (i + 1).to_string(),
                        key.display().to_string(),
                        snapshot.len().to_string(),
                    ]);
                }
                Ok(table.to_string())
            }
            other => Err(ApiError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_show(&self, file: &Path) -> Result<String, ApiError> {
        let store = self.persistence.load()?;
        let key = file_key(file);
        match store.get(&key) {
            Some(snapshot) => Ok(snapshot
                .paths()
                .iter()
                .map(|path| path.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            None => Ok(format!("No fold state remembered for {}", key.display())),
        }
    }

    fn handle_forget(&self, file: &Path) -> Result<String, ApiError> {
        let mut store = self.persistence.load()?;
        let key = file_key(file);
        if store.remove(&key).is_none() {
            return Ok(format!("No fold state remembered for {}", key.display()));
        }
        self.persistence.save(&store)?;
        info!(file = %key.display(), "Forgot fold state");
        Ok(format!("Forgot fold state for {}", key.display()))
    }

    fn handle_clear(&self) -> Result<String, ApiError> {
        self.persistence.clear()?;
        info!(path = %self.persistence.location().display(), "Cleared fold state");
        Ok(format!("Cleared {}", self.persistence.location().display()))
    }

    fn handle_config(&self) -> Result<String, ApiError> {
        let mut effective = self.config.clone();
        effective.state_file = Some(self.persistence.location().to_path_buf());
        toml::to_string_pretty(&effective)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
