//! Value Objects - Immutable, identity-less domain primitives

mod anchor;
mod condition_item;
mod forecast_day;
mod metric;
mod station_reading;
mod uv_index;
mod weather_icon;

pub use anchor::Anchor;
pub use condition_item::{ConditionKind, CurrentConditionItem};
pub use forecast_day::{ForecastDay, ReadingRange};
pub use metric::Metric;
pub use station_reading::{ReadingBatch, StationPreference, StationReading};
pub use uv_index::{UvBand, UvIndex};
pub use weather_icon::WeatherIcon;
