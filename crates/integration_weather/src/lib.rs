//! data.gov.sg environment integration
//!
//! Client for the Singapore government's public environment API
//! (<https://data.gov.sg>). Provides the 4-day outlook and the per-station
//! real-time readings without requiring an API key.

pub mod client;
mod models;

pub use client::{DataGovClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    DailyOutlook, ForecastBundle, LowHigh, ReadingsSnapshot, Station, StationValue,
    TimestampedReadings,
};
