//! Daily forecast value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeatherIcon;
use crate::DomainError;

/// A low/high pair as published by the forecast service
///
/// Used for temperature (°C), relative humidity (%) and wind speed (km/h).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingRange {
    low: f64,
    high: f64,
}

impl ReadingRange {
    /// Create a new range
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if `low` is greater than `high`
    /// or either bound is not a finite number.
    pub fn new(low: f64, high: f64) -> Result<Self, DomainError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(DomainError::invalid_range(low, high));
        }
        Ok(Self { low, high })
    }

    /// Create a range from two bounds in either order
    ///
    /// The published forecast occasionally lists `high` before `low`; the
    /// smaller value becomes the lower bound.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if either bound is not a finite number.
    pub fn from_bounds(a: f64, b: f64) -> Result<Self, DomainError> {
        if a > b { Self::new(b, a) } else { Self::new(a, b) }
    }

    /// Lower bound
    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound
    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }

    /// Format as `low–high` followed by a unit, e.g. `25–33°C`
    #[must_use]
    pub fn format_with_unit(&self, unit: &str) -> String {
        format!("{:.0}–{:.0}{unit}", self.low, self.high)
    }
}

impl fmt::Display for ReadingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}–{:.0}", self.low, self.high)
    }
}

/// One day of the multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Calendar date the forecast applies to
    pub date: NaiveDate,
    /// Free-text description, e.g. "Thundery Showers"
    pub description: String,
    /// Temperature range in °C
    pub temperature: ReadingRange,
    /// Relative humidity range in percent
    pub relative_humidity: ReadingRange,
    /// Wind speed range in km/h
    pub wind: ReadingRange,
}

impl ForecastDay {
    /// Icon matching the free-text description
    #[must_use]
    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::from_description(&self.description)
    }

    /// Label for the card at `index` in a chronologically ordered list
    ///
    /// Index 0 is always "Today"; later days use the short weekday name.
    #[must_use]
    pub fn day_label(&self, index: usize) -> String {
        if index == 0 {
            "Today".to_string()
        } else {
            self.date.format("%a").to_string()
        }
    }

    /// One-line text summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} {}, humidity {}, wind {}",
            self.icon().emoji(),
            self.description,
            self.temperature.format_with_unit("°C"),
            self.relative_humidity.format_with_unit("%"),
            self.wind.format_with_unit(" km/h"),
        )
    }
}
