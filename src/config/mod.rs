//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `COUNCIL` prefix and
//! `__` between nested keys. Every value has a default.
//!
//! ```no_run
//! use council_engine::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! init_tracing(&config.logging)?;
//! # Ok::<(), council_engine::config::ConfigError>(())
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Per-council limits
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads variables with the `COUNCIL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `COUNCIL__ENGINE__MAX_MEMBERS_PER_COUNCIL=12` -> `engine.max_members_per_council = 12`
    /// - `COUNCIL__LOGGING__JSON=true` -> `logging.json = true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("COUNCIL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
