//! Error types for the fold-state keeper.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the persisted fold-state record
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The on-disk record exists but could not be parsed
    #[error("Corrupt fold-state record {}: {source}", .path.display())]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize fold-state record: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Top-level error returned by the keeper's fallible operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Error decoding a stored structural path string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathCodecError {
    #[error("structural path has no labels")]
    Empty,
}
