//! Page and current-conditions configuration

use application::{DEFAULT_REVEAL_STEP, JoinPolicy};
use chrono_tz::Tz;
use domain::{Anchor, StationPreference};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,

    /// Containers present on the page
    #[serde(default = "default_anchors")]
    pub anchors: Vec<Anchor>,

    /// Gap between two card reveals in milliseconds
    #[serde(default = "default_reveal_step_ms")]
    pub reveal_step_ms: u64,

    /// IANA timezone used for the UV estimate hour
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Directory with templates overriding the embedded ones
    #[serde(default)]
    pub templates_dir: Option<String>,
}

fn default_title() -> String {
    "Shorecast".to_string()
}

fn default_anchors() -> Vec<Anchor> {
    Anchor::ALL.to_vec()
}

#[allow(clippy::cast_possible_truncation)]
const fn default_reveal_step_ms() -> u64 {
    DEFAULT_REVEAL_STEP.as_millis() as u64
}

fn default_timezone() -> String {
    "Asia/Singapore".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            anchors: default_anchors(),
            reveal_step_ms: default_reveal_step_ms(),
            timezone: default_timezone(),
            templates_dir: None,
        }
    }
}

impl PageConfig {
    /// Parsed timezone
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Unknown timezone: {}", self.timezone)))
    }
}

/// Current-conditions configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsConfig {
    /// How the metric requests are joined
    #[serde(default)]
    pub join_policy: JoinPolicy,

    /// Station id or name fragments preferred for the panel
    #[serde(default = "default_preferred_stations")]
    pub preferred_stations: Vec<String>,
}

fn default_preferred_stations() -> Vec<String> {
    StationPreference::DEFAULT_KEYWORDS
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for ConditionsConfig {
    fn default() -> Self {
        Self {
            join_policy: JoinPolicy::default(),
            preferred_stations: default_preferred_stations(),
        }
    }
}

impl ConditionsConfig {
    /// Station preference built from the configured keywords
    #[must_use]
    pub fn station_preference(&self) -> StationPreference {
        StationPreference::new(&self.preferred_stations)
    }
}
