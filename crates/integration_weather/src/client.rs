//! data.gov.sg weather client
//!
//! HTTP client for the environment endpoints of the data.gov.sg API.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    DailyOutlook, ForecastBundle, RawDailyOutlook, RawForecastResponse, RawReadingsResponse,
    ReadingsSnapshot, Station, TimestampedReadings,
};

/// Path of the 4-day outlook endpoint
const FOUR_DAY_FORECAST_PATH: &str = "4-day-weather-forecast";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Endpoint does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Environment API base URL (default: <https://api.data.gov.sg/v1/environment>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.data.gov.sg/v1/environment".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the forecast items of the 4-day outlook
    ///
    /// The service normally returns exactly one item; an empty list is
    /// passed through unchanged.
    async fn get_four_day_forecast(&self) -> Result<Vec<ForecastBundle>, WeatherError>;

    /// Get the per-station readings published at `endpoint`
    /// (e.g. `air-temperature`)
    async fn get_readings(&self, endpoint: &str) -> Result<ReadingsSnapshot, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// data.gov.sg HTTP client implementation
#[derive(Debug)]
pub struct DataGovClient {
    client: Client,
    config: WeatherConfig,
}

impl DataGovClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Build the URL of an endpoint below the base URL
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// GET a JSON document and decode it
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                WeatherError::ConnectionFailed(e.to_string())
            } else {
                WeatherError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(url.to_string()));
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Parse one raw daily outlook
    fn parse_outlook(raw: &RawDailyOutlook) -> Result<DailyOutlook, WeatherError> {
        let date = Self::parse_date(&raw.date)?;

        Ok(DailyOutlook {
            date,
            forecast: raw.forecast.trim().to_string(),
            temperature: raw.temperature,
            relative_humidity: raw.relative_humidity,
            wind_speed: raw.wind.speed,
            wind_direction: raw.wind.direction.clone(),
        })
    }

    /// Parse the raw forecast response into bundles
    fn parse_forecast(raw: RawForecastResponse) -> Result<Vec<ForecastBundle>, WeatherError> {
        raw.items
            .into_iter()
            .map(|item| {
                let forecasts = item
                    .forecasts
                    .iter()
                    .map(Self::parse_outlook)
                    .collect::<Result<Vec<_>, _>>()?;
                let update_timestamp = item
                    .update_timestamp
                    .as_deref()
                    .map(Self::parse_timestamp)
                    .transpose()?;
                Ok::<_, WeatherError>(ForecastBundle {
                    update_timestamp,
                    forecasts,
                })
            })
            .collect()
    }

    /// Parse the raw readings response
    fn parse_readings(raw: RawReadingsResponse) -> Result<ReadingsSnapshot, WeatherError> {
        let metadata = raw.metadata.unwrap_or_default();

        let stations = metadata
            .stations
            .into_iter()
            .filter_map(|s| s.name.map(|name| Station { id: s.id, name }))
            .collect();

        let items = raw
            .items
            .into_iter()
            .map(|item| {
                let timestamp = item
                    .timestamp
                    .as_deref()
                    .map(Self::parse_timestamp)
                    .transpose()?;
                Ok::<_, WeatherError>(TimestampedReadings {
                    timestamp,
                    readings: item.readings,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReadingsSnapshot {
            stations,
            reading_unit: metadata.reading_unit,
            items,
        })
    }

    /// Parse a forecast date (`2024-06-03`, optionally with a time suffix)
    fn parse_date(s: &str) -> Result<NaiveDate, WeatherError> {
        let date_part = s.get(..10).unwrap_or(s);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| WeatherError::ParseError(format!("Invalid date {s}: {e}")))
    }

    /// Parse an RFC 3339 timestamp (`2024-06-03T10:00:00+08:00`)
    fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, WeatherError> {
        DateTime::parse_from_rfc3339(s)
            .map_err(|e| WeatherError::ParseError(format!("Invalid timestamp {s}: {e}")))
    }
}

#[async_trait]
impl WeatherClient for DataGovClient {
    #[instrument(skip(self))]
    async fn get_four_day_forecast(&self) -> Result<Vec<ForecastBundle>, WeatherError> {
        let url = self.endpoint_url(FOUR_DAY_FORECAST_PATH);
        debug!(url = %url, "Fetching 4-day forecast");

        let raw: RawForecastResponse = self.get_json(&url).await?;
        let bundles = Self::parse_forecast(raw)?;

        debug!(items = bundles.len(), "Parsed 4-day forecast");
        Ok(bundles)
    }

    #[instrument(skip(self))]
    async fn get_readings(&self, endpoint: &str) -> Result<ReadingsSnapshot, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, "Fetching station readings");

        let raw: RawReadingsResponse = self.get_json(&url).await?;
        let snapshot = Self::parse_readings(raw)?;

        debug!(
            batches = snapshot.items.len(),
            stations = snapshot.stations.len(),
            "Parsed station readings"
        );
        Ok(snapshot)
    }

    async fn is_healthy(&self) -> bool {
        self.get_four_day_forecast().await.is_ok()
    }
}
