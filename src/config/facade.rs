//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::KeeperConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<KeeperConfig, ApiError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<KeeperConfig, ApiError> {
        MergeService::load_from_file(path)
    }
}
