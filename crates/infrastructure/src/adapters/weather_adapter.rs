//! Weather adapter - Implements WeatherPort using integration_weather

use std::cmp::Reverse;
use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ForecastItem, WeatherPort};
use async_trait::async_trait;
use domain::{DomainError, ForecastDay, Metric, ReadingBatch, ReadingRange, StationReading};
use integration_weather::{
    DailyOutlook, DataGovClient, ForecastBundle, ReadingsSnapshot, WeatherClient, WeatherConfig,
    WeatherError,
};
use tracing::{debug, instrument, warn};

/// Adapter for the data.gov.sg environment API
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"DataGovClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            DataGovClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::InvalidResponse(e),
            WeatherError::NotFound(e) => ApplicationError::NotFound(e),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert one daily outlook into a domain forecast day
    fn map_day(outlook: &DailyOutlook) -> Result<ForecastDay, DomainError> {
        Ok(ForecastDay {
            date: outlook.date,
            description: outlook.forecast.clone(),
            temperature: ReadingRange::from_bounds(
                outlook.temperature.low,
                outlook.temperature.high,
            )?,
            relative_humidity: ReadingRange::from_bounds(
                outlook.relative_humidity.low,
                outlook.relative_humidity.high,
            )?,
            wind: ReadingRange::from_bounds(outlook.wind_speed.low, outlook.wind_speed.high)?,
        })
    }

    /// Convert a forecast bundle into a forecast item
    ///
    /// A day whose ranges cannot be represented is skipped; the rest of the
    /// bundle still renders.
    fn map_bundle(bundle: &ForecastBundle) -> ForecastItem {
        let days = bundle
            .forecasts
            .iter()
            .filter_map(|outlook| match Self::map_day(outlook) {
                Ok(day) => Some(day),
                Err(e) => {
                    warn!(date = %outlook.date, error = %e, "Skipping unusable forecast day");
                    None
                },
            })
            .collect();
        ForecastItem {
            issued_at: bundle.update_timestamp,
            days,
        }
    }

    /// Convert a readings snapshot into batches, latest first, with station names attached
    fn map_snapshot(snapshot: &ReadingsSnapshot) -> Vec<ReadingBatch> {
        let names = snapshot.station_names();
        let mut batches: Vec<ReadingBatch> = snapshot
            .items
            .iter()
            .map(|item| ReadingBatch {
                timestamp: item.timestamp,
                readings: item
                    .readings
                    .iter()
                    .map(|r| {
                        let reading = StationReading::new(r.station_id.clone(), r.value);
                        match names.get(r.station_id.as_str()) {
                            Some(name) => reading.with_name(*name),
                            None => reading,
                        }
                    })
                    .collect(),
            })
            .collect();
        // Stable: untimestamped batches keep upstream order after timestamped ones
        batches.sort_by_key(|b| Reverse(b.timestamp));
        batches
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn get_forecast(&self) -> Result<Vec<ForecastItem>, ApplicationError> {
        let result = self
            .client
            .get_four_day_forecast()
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(bundles) => {
                debug!(items = bundles.len(), "Retrieved 4-day forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get 4-day forecast");
            },
        }

        Ok(result?.iter().map(Self::map_bundle).collect())
    }

    #[instrument(skip(self), fields(endpoint = metric.endpoint()))]
    async fn get_readings(&self, metric: Metric) -> Result<Vec<ReadingBatch>, ApplicationError> {
        let snapshot = self
            .client
            .get_readings(metric.endpoint())
            .await
            .map_err(Self::map_error)?;

        let batches = Self::map_snapshot(&snapshot);
        debug!(
            batches = batches.len(),
            stations = batches.first().map_or(0, |b| b.readings.len()),
            "Retrieved readings"
        );
        Ok(batches)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
