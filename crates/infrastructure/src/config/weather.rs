//! Weather API configuration

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Environment API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    WeatherConfig::default().base_url
}

fn default_weather_timeout() -> u64 {
    WeatherConfig::default().timeout_secs
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl From<&WeatherAppConfig> for WeatherConfig {
    fn from(config: &WeatherAppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}
