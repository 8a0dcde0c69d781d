//! Weather service port
//!
//! Defines the interface for forecast and station-reading retrieval.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use domain::{ForecastDay, Metric, ReadingBatch};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One forecast item: the daily forecasts issued together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    /// When the item was issued
    pub issued_at: Option<DateTime<FixedOffset>>,
    /// Daily forecasts, chronological, index 0 = today
    pub days: Vec<ForecastDay>,
}

impl ForecastItem {
    /// Whether the item carries at least one day
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.days.is_empty()
    }
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the forecast items of the multi-day outlook
    async fn get_forecast(&self) -> Result<Vec<ForecastItem>, ApplicationError>;

    /// Get reading batches for a metric, latest batch first
    async fn get_readings(&self, metric: Metric) -> Result<Vec<ReadingBatch>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[test]
    fn empty_item_is_not_usable() {
        let item = ForecastItem {
            issued_at: None,
            days: vec![],
        };
        assert!(!item.is_usable());
    }
}
