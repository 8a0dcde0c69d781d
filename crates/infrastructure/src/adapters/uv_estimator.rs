//! Synthetic UV index source
//!
//! Draws a value from the range typical for the local hour of day.

use application::ports::UvEstimatePort;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use domain::UvIndex;
use rand::Rng;
use tracing::debug;

/// Pseudo-random UV estimate by local hour
#[derive(Debug, Clone, Copy)]
pub struct RandomUvEstimator {
    timezone: Tz,
    fixed_hour: Option<u32>,
}

impl RandomUvEstimator {
    /// Estimate using the current hour in `timezone`
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            fixed_hour: None,
        }
    }

    /// Always use the given hour
    #[must_use]
    pub const fn with_fixed_hour(mut self, hour: u32) -> Self {
        self.fixed_hour = Some(hour);
        self
    }

    /// Local hour at `now`
    #[must_use]
    pub fn hour_at(&self, now: DateTime<Utc>) -> u32 {
        self.fixed_hour
            .unwrap_or_else(|| now.with_timezone(&self.timezone).hour())
    }
}

impl Default for RandomUvEstimator {
    fn default() -> Self {
        Self::new(Tz::Asia__Singapore)
    }
}

impl UvEstimatePort for RandomUvEstimator {
    fn estimate(&self) -> UvIndex {
        let hour = self.hour_at(Utc::now());
        let value = rand::rng().random_range(UvIndex::estimate_range(hour));
        debug!(hour, value, "Estimated UV index");
        UvIndex::new(value)
    }
}
