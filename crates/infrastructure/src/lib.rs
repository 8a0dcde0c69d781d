//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the data.gov.sg
//! weather adapter, the in-memory HTML page, announcers and the UV estimate.
//! Also owns configuration loading, logging setup and templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, ConditionsConfig, ConfigError, PageConfig, WeatherAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use templates::{PageSnapshot, TemplateConfig, TemplateEngine, TemplateError};
