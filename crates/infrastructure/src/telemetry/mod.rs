//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either
//! human-readable or JSON output.

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "shorecast=debug,integration_weather=info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// Include source file and line in each event
    #[serde(default)]
    pub with_file: bool,
}

fn default_log_filter() -> String {
    "warn,shorecast=info,application=info,infrastructure=info,integration_weather=info"
        .to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            with_file: false,
        }
    }
}

impl TelemetryConfig {
    /// Filter used when `RUST_LOG` is not set
    ///
    /// A non-empty `override_filter` (from the command line) wins over the
    /// configured one.
    #[must_use]
    pub fn env_filter(&self, override_filter: Option<&str>) -> EnvFilter {
        let directives = override_filter
            .filter(|f| !f.is_empty())
            .unwrap_or(self.log_filter.as_str());
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    }
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Initialize logging with the given configuration
///
/// Logs go to stderr so rendered output on stdout stays clean.
pub fn init_telemetry(
    config: &TelemetryConfig,
    override_filter: Option<&str>,
) -> Result<(), TelemetryError> {
    let env_filter = config.env_filter(override_filter);
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(config.with_file)
                    .with_line_number(config.with_file),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .with_file(config.with_file)
                    .with_line_number(config.with_file),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Logging initialized");
    Ok(())
}
