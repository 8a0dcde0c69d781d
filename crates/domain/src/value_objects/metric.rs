//! Current-condition metrics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilometres per hour in one knot
const KMH_PER_KNOT: f64 = 1.852;

/// An environmental metric published as per-station readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Air temperature
    Temperature,
    /// Relative humidity
    Humidity,
    /// Rainfall
    Rainfall,
    /// Wind speed
    WindSpeed,
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::Humidity,
        Self::Rainfall,
        Self::WindSpeed,
    ];

    /// Endpoint path segment below the environment API base
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Temperature => "air-temperature",
            Self::Humidity => "relative-humidity",
            Self::Rainfall => "rainfall",
            Self::WindSpeed => "wind-speed",
        }
    }

    /// Card label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Rainfall => "Rainfall",
            Self::WindSpeed => "Wind Speed",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Rainfall => "mm",
            Self::WindSpeed => "km/h",
        }
    }

    /// Card icon
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Temperature => "🌡️",
            Self::Humidity => "💧",
            Self::Rainfall => "🌧️",
            Self::WindSpeed => "💨",
        }
    }

    /// Convert a raw upstream value into the display unit
    ///
    /// Wind speed is published in knots.
    #[must_use]
    pub fn to_display_value(&self, raw: f64) -> f64 {
        match self {
            Self::WindSpeed => raw * KMH_PER_KNOT,
            Self::Temperature | Self::Humidity | Self::Rainfall => raw,
        }
    }

    /// Format a raw upstream value for display (without unit)
    #[must_use]
    pub fn format_value(&self, raw: f64) -> String {
        let value = self.to_display_value(raw);
        match self {
            Self::Humidity => format!("{value:.0}"),
            Self::Temperature | Self::Rainfall | Self::WindSpeed => format!("{value:.1}"),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
