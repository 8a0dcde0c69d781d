//! Adapters implementing application ports

mod html_page;
mod tracing_announcer;
mod uv_estimator;
mod weather_adapter;

pub use html_page::HtmlPage;
pub use tracing_announcer::{FanoutAnnouncer, TracingAnnouncer};
pub use uv_estimator::RandomUvEstimator;
pub use weather_adapter::WeatherAdapter;
