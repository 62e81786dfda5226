//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file via the `config`
//! crate, overlaid with `SETUPLINK__*` environment variables. Each sub-module
//! is one configuration section.

pub mod logging;
pub mod setup_link;
pub mod store;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::setup_link::SetupLinkConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Setup link issuance settings.
    #[serde(default)]
    pub setup_link: SetupLinkConfig,
    /// Indexed store backend settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (optional) and the environment.
    ///
    /// Environment variables use the `SETUPLINK` prefix and `__` as the
    /// section separator, e.g. `SETUPLINK__SETUP_LINK__BASE_URL`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SETUPLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values the service cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.setup_link.base_url.trim().is_empty() {
            return Err(AppError::configuration("setup_link.base_url must not be empty"));
        }
        if self.setup_link.ttl_days == 0 {
            return Err(AppError::configuration("setup_link.ttl_days must be at least 1"));
        }
        Ok(())
    }
}
