//! Weather data models
//!
//! Raw response shapes of the environment API plus the parsed types the
//! client hands out.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A low/high pair as published by the API
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LowHigh {
    pub low: f64,
    pub high: f64,
}

/// One day of the 4-day outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOutlook {
    /// Forecast date
    pub date: NaiveDate,
    /// Free-text forecast, e.g. "Thundery Showers"
    pub forecast: String,
    /// Temperature in °C
    pub temperature: LowHigh,
    /// Relative humidity in percent
    pub relative_humidity: LowHigh,
    /// Wind speed in km/h
    pub wind_speed: LowHigh,
    /// Prevailing wind direction, e.g. "NNE"
    pub wind_direction: Option<String>,
}

/// One forecast item: a bundle of daily outlooks issued together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBundle {
    /// When the bundle was issued
    pub update_timestamp: Option<DateTime<FixedOffset>>,
    /// Daily outlooks in chronological order
    pub forecasts: Vec<DailyOutlook>,
}

impl ForecastBundle {
    /// Get today's outlook
    #[must_use]
    pub fn today(&self) -> Option<&DailyOutlook> {
        self.forecasts.first()
    }
}

/// A weather station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
}

/// A station's reading inside a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationValue {
    pub station_id: String,
    pub value: f64,
}

/// All station readings taken at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedReadings {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub readings: Vec<StationValue>,
}

/// Parsed response of a readings endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingsSnapshot {
    /// Stations listed in the response metadata
    pub stations: Vec<Station>,
    /// Reading unit as published, e.g. "deg C" or "knots"
    pub reading_unit: Option<String>,
    /// Snapshots, latest first
    pub items: Vec<TimestampedReadings>,
}

impl ReadingsSnapshot {
    /// Latest snapshot, if any
    #[must_use]
    pub fn latest(&self) -> Option<&TimestampedReadings> {
        self.items.first()
    }

    /// Map of station id to station name
    #[must_use]
    pub fn station_names(&self) -> HashMap<&str, &str> {
        self.stations
            .iter()
            .map(|s| (s.id.as_str(), s.name.as_str()))
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Raw API shapes
// ----------------------------------------------------------------------------

/// Raw wind block of a daily outlook
#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    pub speed: LowHigh,
    #[serde(default)]
    pub direction: Option<String>,
}

/// Raw daily outlook
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyOutlook {
    pub date: String,
    pub forecast: String,
    pub temperature: LowHigh,
    pub relative_humidity: LowHigh,
    pub wind: RawWind,
}

/// Raw forecast item
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastItem {
    #[serde(default)]
    pub update_timestamp: Option<String>,
    #[serde(default)]
    pub forecasts: Vec<RawDailyOutlook>,
}

/// Raw 4-day forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastResponse {
    #[serde(default)]
    pub items: Vec<RawForecastItem>,
}

/// Raw station metadata
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw readings metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReadingsMetadata {
    #[serde(default)]
    pub stations: Vec<RawStation>,
    #[serde(default)]
    pub reading_unit: Option<String>,
}

/// Raw readings item
#[derive(Debug, Clone, Deserialize)]
pub struct RawReadingsItem {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub readings: Vec<StationValue>,
}

/// Raw readings response
#[derive(Debug, Clone, Deserialize)]
pub struct RawReadingsResponse {
    #[serde(default)]
    pub metadata: Option<RawReadingsMetadata>,
    #[serde(default)]
    pub items: Vec<RawReadingsItem>,
}
