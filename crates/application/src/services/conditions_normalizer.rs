//! Current-conditions normalizer
//!
//! Reduces each metric's reading batches to a single display item using the
//! preferred-station heuristic, then appends the UV estimate.

use domain::{
    CurrentConditionItem, Metric, ReadingBatch, StationPreference, StationReading, UvIndex,
};
use tracing::debug;

/// Reading batches fetched for one metric
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReadings {
    pub metric: Metric,
    pub batches: Vec<ReadingBatch>,
}

impl MetricReadings {
    /// Bundle batches with their metric
    #[must_use]
    pub const fn new(metric: Metric, batches: Vec<ReadingBatch>) -> Self {
        Self { metric, batches }
    }
}

/// Selects one reading per metric
#[derive(Debug, Clone, Default)]
pub struct ConditionsNormalizer {
    preference: StationPreference,
}

impl ConditionsNormalizer {
    /// Create a normalizer with a station preference
    #[must_use]
    pub const fn new(preference: StationPreference) -> Self {
        Self { preference }
    }

    /// Pick the reading to display from the latest batch
    ///
    /// Batch 0 is the latest. A missing or empty batch yields `None`.
    #[must_use]
    pub fn select_reading<'a>(&self, batches: &'a [ReadingBatch]) -> Option<&'a StationReading> {
        let latest = batches.first()?;
        self.preference.select(&latest.readings)
    }

    /// Build the ordered list of condition items
    ///
    /// Items follow [`Metric::ALL`] regardless of input order; metrics with
    /// no usable reading are left out. The UV item, when given, comes last.
    #[must_use]
    pub fn normalize(
        &self,
        readings: &[MetricReadings],
        uv: Option<UvIndex>,
    ) -> Vec<CurrentConditionItem> {
        let mut items: Vec<_> = Metric::ALL
            .iter()
            .filter_map(|metric| {
                let batches = readings.iter().find(|r| r.metric == *metric)?;
                let Some(reading) = self.select_reading(&batches.batches) else {
                    debug!(%metric, "No readings in latest batch, omitting metric");
                    return None;
                };
                debug!(
                    %metric,
                    station = %reading.station_id,
                    value = reading.value,
                    "Selected reading"
                );
                Some(CurrentConditionItem::from_reading(*metric, reading))
            })
            .collect();

        if let Some(uv) = uv {
            items.push(CurrentConditionItem::from_uv(uv));
        }
        items
    }
}
