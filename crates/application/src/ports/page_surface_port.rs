//! Page surface port
//!
//! The weather panel writes into pre-existing page containers. This port is
//! the only way the pipeline touches the page.

use chrono::NaiveDate;
use domain::{Anchor, CurrentConditionItem, WeatherIcon};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Handle of a card appended to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u64);

/// Display model of one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastCard {
    /// Position in the grid
    pub index: usize,
    /// Whether this is the first (today) card
    pub is_today: bool,
    /// "Today" or short weekday
    pub day_label: String,
    /// Short date, e.g. "3 Jun"
    pub date_label: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Icon chosen from the description
    pub icon: WeatherIcon,
    /// Icon emoji
    pub icon_emoji: String,
    /// Icon CSS class
    pub icon_class: String,
    /// Free-text description
    pub description: String,
    /// e.g. "25–33°C"
    pub temperature: String,
    /// e.g. "60–95%"
    pub humidity: String,
    /// e.g. "10–20 km/h"
    pub wind: String,
    /// Delay before the card becomes visible
    pub reveal_delay_ms: u64,
}

/// Display model of one current-condition card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCard {
    /// Position in the panel
    pub index: usize,
    /// The projected condition
    pub item: CurrentConditionItem,
    /// Delay before the card becomes visible
    pub reveal_delay_ms: u64,
}

/// Port for writing to the page
#[cfg_attr(test, automock)]
pub trait PageSurfacePort: Send + Sync {
    /// Whether the page has the given container
    fn has_anchor(&self, anchor: Anchor) -> bool;

    /// Show or hide a container
    fn set_visible(&self, anchor: Anchor, visible: bool);

    /// Remove all cards from a container
    fn clear(&self, anchor: Anchor);

    /// Append a hidden forecast card to the forecast grid
    fn append_forecast_card(&self, card: &ForecastCard) -> CardId;

    /// Append a hidden condition card to the conditions container
    fn append_condition_card(&self, card: &ConditionCard) -> CardId;

    /// Make a previously appended card visible
    fn reveal(&self, card: CardId);
}
