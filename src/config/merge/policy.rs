//! Built-in defaults every configuration load starts from.

use crate::config::DEFAULT_MAX_HISTORY;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("max_history", DEFAULT_MAX_HISTORY as i64)?
        .set_default("after_clear_delay_ms", 0i64)
}
