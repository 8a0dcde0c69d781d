//! Forecast retrieval pipeline
//!
//! Fetches the multi-day forecast, renders it, then fans out one request per
//! current-condition metric and renders whatever the join policy lets
//! through. Runs are single-flight: a run started while another is still in
//! progress returns immediately without touching the page.

use std::sync::Arc;
use std::time::Duration;

use domain::{ConditionKind, ForecastDay, Metric, StationPreference};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::conditions_normalizer::{ConditionsNormalizer, MetricReadings};
use super::panel_state::{PanelState, PanelStateController};
use super::render_stage::{DEFAULT_REVEAL_STEP, RenderStage};
use crate::error::ApplicationError;
use crate::ports::{AnnouncerPort, PageSurfacePort, Politeness, UvEstimatePort, WeatherPort};

/// How the current-condition requests are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinPolicy {
    /// Any failed request leaves the conditions panel untouched
    #[default]
    AllOrNothing,
    /// Each request stands alone; failed metrics are omitted
    Partial,
}

/// Pipeline tuning
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Gap between two card reveals
    pub reveal_step: Duration,
    /// Join policy for the condition requests
    pub join_policy: JoinPolicy,
    /// Preferred stations for the conditions panel
    pub station_preference: StationPreference,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reveal_step: DEFAULT_REVEAL_STEP,
            join_policy: JoinPolicy::default(),
            station_preference: StationPreference::default(),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// Forecast rendered (conditions may still have failed)
    Rendered,
    /// Forecast request failed or had no usable item
    ForecastUnavailable,
    /// Another run was in progress
    AlreadyRunning,
}

/// Summary of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// How the run ended
    pub outcome: PipelineOutcome,
    /// Final panel state
    pub panel_state: PanelState,
    /// Number of forecast cards rendered
    pub forecast_cards: usize,
    /// Whether the conditions panel was updated
    pub conditions_updated: bool,
    /// Condition cards rendered, in order
    pub conditions: Vec<ConditionKind>,
    /// Metrics whose request failed
    pub failed_metrics: Vec<Metric>,
}

impl PipelineReport {
    fn skipped() -> Self {
        Self {
            outcome: PipelineOutcome::AlreadyRunning,
            panel_state: PanelState::Idle,
            forecast_cards: 0,
            conditions_updated: false,
            conditions: Vec::new(),
            failed_metrics: Vec::new(),
        }
    }

    fn forecast_unavailable() -> Self {
        Self {
            outcome: PipelineOutcome::ForecastUnavailable,
            panel_state: PanelState::Failed,
            ..Self::skipped()
        }
    }
}

/// Result of the condition fan-out
#[derive(Debug)]
struct ConditionsFetch {
    readings: Vec<MetricReadings>,
    failed: Vec<Metric>,
    aborted: bool,
}

/// The weather forecast pipeline
pub struct ForecastPipeline {
    weather: Arc<dyn WeatherPort>,
    surface: Arc<dyn PageSurfacePort>,
    announcer: Arc<dyn AnnouncerPort>,
    uv: Arc<dyn UvEstimatePort>,
    config: PipelineConfig,
    render: RenderStage,
    normalizer: ConditionsNormalizer,
    in_flight: Mutex<()>,
}

impl std::fmt::Debug for ForecastPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ForecastPipeline {
    /// Create a pipeline
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        surface: Arc<dyn PageSurfacePort>,
        announcer: Arc<dyn AnnouncerPort>,
        uv: Arc<dyn UvEstimatePort>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            render: RenderStage::new(config.reveal_step),
            normalizer: ConditionsNormalizer::new(config.station_preference.clone()),
            weather,
            surface,
            announcer,
            uv,
            config,
            in_flight: Mutex::new(()),
        }
    }

    /// Run the pipeline once
    #[instrument(skip(self))]
    pub async fn run(&self) -> PipelineReport {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("Pipeline already running, skipping");
            return PipelineReport::skipped();
        };

        let surface = self.surface.as_ref();
        let mut state = PanelStateController::new(surface);
        state.begin();

        let days = match self.fetch_forecast().await {
            Ok(days) => days,
            Err(e) => {
                warn!(error = %e, "Forecast unavailable");
                state.forecast_failed();
                self.announcer.announce(
                    "Weather forecast is currently unavailable",
                    Politeness::Assertive,
                );
                return PipelineReport::forecast_unavailable();
            },
        };

        let card_ids = self.render.render_forecast(surface, &days);
        state.forecast_ready();
        info!(days = days.len(), "Forecast rendered");
        self.announcer.announce(
            &format!("Weather forecast loaded for {} days", days.len()),
            Politeness::Polite,
        );

        let (_, fetch) = tokio::join!(
            self.render.reveal(surface, &card_ids),
            self.fetch_conditions()
        );

        let mut report = PipelineReport {
            outcome: PipelineOutcome::Rendered,
            panel_state: state.state(),
            forecast_cards: card_ids.len(),
            conditions_updated: false,
            conditions: Vec::new(),
            failed_metrics: fetch.failed.clone(),
        };

        if fetch.aborted {
            warn!(failed = ?fetch.failed, "Current conditions not updated");
            return report;
        }

        let items = self
            .normalizer
            .normalize(&fetch.readings, Some(self.uv.estimate()));
        let condition_ids = self.render.render_conditions(surface, &items);
        if !condition_ids.is_empty() {
            report.conditions_updated = true;
            report.conditions = items.iter().map(|i| i.kind).collect();
            self.announcer
                .announce("Current conditions updated", Politeness::Polite);
            self.render.reveal(surface, &condition_ids).await;
        }

        report
    }

    /// Fetch the forecast and take the first usable item
    async fn fetch_forecast(&self) -> Result<Vec<ForecastDay>, ApplicationError> {
        let items = self.weather.get_forecast().await?;
        let item = items.into_iter().next().ok_or_else(|| {
            ApplicationError::InvalidResponse("Forecast response has no items".to_string())
        })?;
        if !item.is_usable() {
            return Err(ApplicationError::InvalidResponse(
                "Forecast item has no days".to_string(),
            ));
        }
        Ok(item.days)
    }

    /// Fetch every metric concurrently and apply the join policy
    async fn fetch_conditions(&self) -> ConditionsFetch {
        let requests = Metric::ALL.into_iter().map(|metric| async move {
            (metric, self.weather.get_readings(metric).await)
        });
        let results = join_all(requests).await;

        let mut readings = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for (metric, result) in results {
            match result {
                Ok(batches) => readings.push(MetricReadings::new(metric, batches)),
                Err(e) => {
                    warn!(%metric, error = %e, "Current-condition request failed");
                    failed.push(metric);
                },
            }
        }

        let aborted = self.config.join_policy == JoinPolicy::AllOrNothing && !failed.is_empty();
        ConditionsFetch {
            readings,
            failed,
            aborted,
        }
    }
}
