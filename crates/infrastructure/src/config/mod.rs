//! Application configuration
//!
//! Split into focused sub-modules by concern:
//! - `weather`: upstream API settings
//! - `page`: page anchors, reveal timing, timezone, station preference
//! - `telemetry` lives in [`crate::telemetry`]
//!
//! Sources are layered: serde defaults, then an optional TOML file, then
//! `SHORECAST_*` environment variables (`SHORECAST_WEATHER__TIMEOUT_SECS=10`).

mod page;
mod weather;

use std::path::Path;
use std::time::Duration;

use application::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use page::{ConditionsConfig, PageConfig};
pub use weather::WeatherAppConfig;

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SHORECAST";

/// Default config file name, looked up in the working directory
const DEFAULT_FILE: &str = "config";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Serialization for display failed
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream weather API
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Page anchors and rendering
    #[serde(default)]
    pub page: PageConfig,

    /// Current-condition panel
    #[serde(default)]
    pub conditions: ConditionsConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from `config.toml` in the working directory (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load from an explicit file (required) or the default file (optional), then the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_FILE).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!(?path, "Configuration loaded");
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_secs must be positive".to_string(),
            ));
        }
        self.page.timezone()?;
        Ok(())
    }

    /// Pipeline tuning derived from the page and conditions sections
    #[must_use]
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            reveal_step: Duration::from_millis(self.page.reveal_step_ms),
            join_policy: self.conditions.join_policy,
            station_preference: self.conditions.station_preference(),
        }
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Environment source for `SHORECAST_*` variables
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("conditions.preferred_stations")
        .with_list_parse_key("page.anchors")
}
