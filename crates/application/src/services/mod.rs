//! Application services - Business logic orchestration

pub mod conditions_normalizer;
pub mod forecast_pipeline;
pub mod panel_state;
pub mod render_stage;
pub mod startup;

pub use conditions_normalizer::{ConditionsNormalizer, MetricReadings};
pub use forecast_pipeline::{
    ForecastPipeline, JoinPolicy, PipelineConfig, PipelineOutcome, PipelineReport,
};
pub use panel_state::{PanelState, PanelStateController};
pub use render_stage::{DEFAULT_REVEAL_STEP, RenderStage};
pub use startup::{Component, PageComponent, Startup, StartupEntry, StartupStatus, WeatherPanel};
