//! Page component startup
//!
//! Each page behavior is built only when the anchors it needs exist. Builders
//! return [`Component::Inactive`] otherwise, and [`Startup`] runs whatever is
//! active.

use std::sync::Arc;

use async_trait::async_trait;
use domain::Anchor;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::forecast_pipeline::{
    ForecastPipeline, PipelineConfig, PipelineOutcome, PipelineReport,
};
use crate::ports::{AnnouncerPort, PageSurfacePort, UvEstimatePort, WeatherPort};

/// A component that may or may not apply to the current page
#[derive(Debug)]
pub enum Component<T> {
    /// Required anchors were found
    Active(T),
    /// A required anchor is missing
    Inactive {
        /// Component name
        name: &'static str,
        /// Anchor that was not found
        missing: Anchor,
    },
}

impl<T> Component<T> {
    /// Whether the component is active
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The active component, if any
    pub fn active(self) -> Option<T> {
        match self {
            Self::Active(inner) => Some(inner),
            Self::Inactive { .. } => None,
        }
    }
}

/// Status of one component after startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum StartupStatus {
    /// Started and finished its initial work
    Started { detail: String },
    /// Started but its initial work failed
    Degraded { detail: String },
    /// Not started because an anchor is missing
    Skipped { missing: Anchor },
}

/// One entry of the startup report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupEntry {
    pub component: String,
    #[serde(flatten)]
    pub status: StartupStatus,
}

/// A page behavior started on page load
#[async_trait]
pub trait PageComponent: Send + Sync + std::fmt::Debug {
    /// Component name used in logs
    fn name(&self) -> &'static str;

    /// Perform the initial work
    async fn start(&self) -> StartupStatus;
}

/// The weather forecast panel
#[derive(Debug)]
pub struct WeatherPanel {
    pipeline: ForecastPipeline,
}

impl WeatherPanel {
    /// Component name
    pub const NAME: &'static str = "weather-panel";

    /// Attach to the page if it has a forecast grid
    pub fn attach(
        weather: Arc<dyn WeatherPort>,
        surface: Arc<dyn PageSurfacePort>,
        announcer: Arc<dyn AnnouncerPort>,
        uv: Arc<dyn UvEstimatePort>,
        config: PipelineConfig,
    ) -> Component<Self> {
        if !surface.has_anchor(Anchor::ForecastGrid) {
            debug!("No forecast grid on page, weather panel inactive");
            return Component::Inactive {
                name: Self::NAME,
                missing: Anchor::ForecastGrid,
            };
        }
        Component::Active(Self {
            pipeline: ForecastPipeline::new(weather, surface, announcer, uv, config),
        })
    }

    /// Run the pipeline and return its full report
    pub async fn refresh(&self) -> PipelineReport {
        self.pipeline.run().await
    }
}

#[async_trait]
impl PageComponent for WeatherPanel {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn start(&self) -> StartupStatus {
        let report = self.refresh().await;
        match report.outcome {
            PipelineOutcome::Rendered => StartupStatus::Started {
                detail: format!(
                    "{} forecast cards, {} condition cards",
                    report.forecast_cards,
                    report.conditions.len()
                ),
            },
            PipelineOutcome::ForecastUnavailable => StartupStatus::Degraded {
                detail: "forecast unavailable".to_string(),
            },
            PipelineOutcome::AlreadyRunning => StartupStatus::Degraded {
                detail: "already running".to_string(),
            },
        }
    }
}

/// Composes page components into one startup routine
#[derive(Debug, Default)]
pub struct Startup {
    components: Vec<Component<Box<dyn PageComponent>>>,
}

impl Startup {
    /// Create an empty startup routine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component
    #[must_use]
    pub fn with<T: PageComponent + 'static>(mut self, component: Component<T>) -> Self {
        let boxed = match component {
            Component::Active(inner) => {
                Component::Active(Box::new(inner) as Box<dyn PageComponent>)
            },
            Component::Inactive { name, missing } => Component::Inactive { name, missing },
        };
        self.components.push(boxed);
        self
    }

    /// Number of active components
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_active()).count()
    }

    /// Start every active component in registration order
    pub async fn run(&self) -> Vec<StartupEntry> {
        let mut entries = Vec::with_capacity(self.components.len());
        for component in &self.components {
            let entry = match component {
                Component::Active(inner) => StartupEntry {
                    component: inner.name().to_string(),
                    status: inner.start().await,
                },
                Component::Inactive { name, missing } => StartupEntry {
                    component: (*name).to_string(),
                    status: StartupStatus::Skipped { missing: *missing },
                },
            };
            info!(component = %entry.component, status = ?entry.status, "Component started");
            entries.push(entry);
        }
        entries
    }
}
