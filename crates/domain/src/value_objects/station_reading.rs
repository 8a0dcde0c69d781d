//! Station readings and the nearest-station heuristic

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One sensor station's instantaneous measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    /// Upstream station identifier, e.g. "S50"
    pub station_id: String,
    /// Human-readable station name when the service publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
    /// Raw measured value in the service's unit
    pub value: f64,
}

impl StationReading {
    /// Create a reading without a station name
    pub fn new(station_id: impl Into<String>, value: f64) -> Self {
        Self {
            station_id: station_id.into(),
            station_name: None,
            value,
        }
    }

    /// Attach a human-readable station name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.station_name = Some(name.into());
        self
    }

    /// Name for display, falling back to the identifier
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.station_name.as_deref().unwrap_or(&self.station_id)
    }
}

/// One timestamped snapshot of readings across all stations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingBatch {
    /// Observation time of the snapshot
    #[serde(default)]
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Readings, one per station
    #[serde(default)]
    pub readings: Vec<StationReading>,
}

impl ReadingBatch {
    /// Create a batch from readings
    #[must_use]
    pub const fn new(readings: Vec<StationReading>) -> Self {
        Self {
            timestamp: None,
            readings,
        }
    }

    /// Whether the batch holds no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Preferred-station heuristic
///
/// Picks the first reading whose station id (or published name) contains one
/// of the keywords, case-insensitively, and falls back to the first reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPreference {
    keywords: Vec<String>,
}

impl StationPreference {
    /// Keywords used when nothing is configured
    pub const DEFAULT_KEYWORDS: [&'static str; 2] = ["pasir", "east"];

    /// Create a preference from keywords
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Normalized keywords
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches(&self, reading: &StationReading) -> bool {
        let id = reading.station_id.to_lowercase();
        let name = reading
            .station_name
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        self.keywords
            .iter()
            .any(|k| id.contains(k.as_str()) || name.contains(k.as_str()))
    }

    /// Select one reading, or `None` for an empty slice
    #[must_use]
    pub fn select<'a>(&self, readings: &'a [StationReading]) -> Option<&'a StationReading> {
        readings
            .iter()
            .find(|r| self.matches(r))
            .or_else(|| readings.first())
    }
}

impl Default for StationPreference {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEYWORDS)
    }
}
