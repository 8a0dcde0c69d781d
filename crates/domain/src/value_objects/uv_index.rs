//! UV index value object
//!
//! The conditions panel shows a UV estimate derived from the local hour.
//! No upstream service supplies it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Exposure band for a UV index value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvBand {
    /// 0-2
    Low,
    /// 3-5
    Moderate,
    /// 6-7
    High,
    /// 8-10
    VeryHigh,
    /// 11+
    Extreme,
}

impl UvBand {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for UvBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A UV index value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UvIndex(u8);

impl UvIndex {
    /// Wrap a UV index value
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Exposure band
    #[must_use]
    pub const fn band(self) -> UvBand {
        match self.0 {
            0..=2 => UvBand::Low,
            3..=5 => UvBand::Moderate,
            6..=7 => UvBand::High,
            8..=10 => UvBand::VeryHigh,
            _ => UvBand::Extreme,
        }
    }

    /// Plausible estimate range for a local hour (0-23)
    ///
    /// Midday hours 10-16 map to 7-10, shoulder hours 7-9 and 17-18 map to
    /// 4-6, and every other hour maps to 1-3.
    #[must_use]
    pub const fn estimate_range(hour: u32) -> RangeInclusive<u8> {
        match hour {
            10..=16 => 7..=10,
            7..=9 | 17..=18 => 4..=6,
            _ => 1..=3,
        }
    }
}

impl fmt::Display for UvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
