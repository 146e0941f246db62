//! MergeService: orchestrates sources, applies merge policy, deserializes to KeeperConfig.

use crate::config::sources::{environment, global_file};
use crate::config::{resolve_max_history, KeeperConfig};
use crate::error::ApiError;
use config::Config;
use std::path::Path;

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> environment (highest).
    pub fn load() -> Result<KeeperConfig, ApiError> {
        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;

        Self::finish(builder.build()?)
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<KeeperConfig, ApiError> {
        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(config::File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        Self::finish(builder.build()?)
    }

    fn finish(raw: Config) -> Result<KeeperConfig, ApiError> {
        let max_history = resolve_max_history(raw.get_string("max_history").ok().as_deref());
        let mut config: KeeperConfig = raw.try_deserialize()?;
        config.max_history = max_history;
        Ok(config)
    }
}
