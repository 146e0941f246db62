//! Environment variable source: CODETREE_KEEPER_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix for environment overrides, e.g. `CODETREE_KEEPER_MAX_HISTORY=50`
pub const ENV_PREFIX: &str = "CODETREE_KEEPER";

/// Add environment variable overlay to builder.
/// Uses CODETREE_KEEPER_ prefix and __ as separator for nested keys.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
