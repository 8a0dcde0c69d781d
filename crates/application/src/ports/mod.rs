//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod announcer_port;
mod page_surface_port;
mod uv_estimate_port;
mod weather_port;

#[cfg(test)]
pub use announcer_port::MockAnnouncerPort;
pub use announcer_port::{AnnouncerPort, Politeness};
#[cfg(test)]
pub use page_surface_port::MockPageSurfacePort;
pub use page_surface_port::{CardId, ConditionCard, ForecastCard, PageSurfacePort};
#[cfg(test)]
pub use uv_estimate_port::MockUvEstimatePort;
pub use uv_estimate_port::UvEstimatePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{ForecastItem, WeatherPort};
