//! Forecast icon selection
//!
//! The forecast service only publishes free text ("Thundery Showers",
//! "Partly Cloudy (Day)", ...), so icons are picked by keyword. The table is
//! scanned in order and the first group with a matching keyword wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown on a forecast card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    /// Thunder or storm
    Thunderstorm,
    /// Heavy rain or showers
    HeavyRain,
    /// Rain
    Rain,
    /// Cloudy or overcast
    Cloudy,
    /// Partly cloudy or fair
    PartlyCloudy,
    /// Haze
    Haze,
    /// Windy
    Windy,
    /// Fallback when nothing matches
    Sunny,
}

/// Keyword groups in priority order
const KEYWORD_TABLE: &[(&[&str], WeatherIcon)] = &[
    (&["thunder", "storm"], WeatherIcon::Thunderstorm),
    (&["heavy rain", "showers"], WeatherIcon::HeavyRain),
    (&["rain"], WeatherIcon::Rain),
    (&["cloudy", "overcast"], WeatherIcon::Cloudy),
    (&["partly cloudy", "fair"], WeatherIcon::PartlyCloudy),
    (&["haze"], WeatherIcon::Haze),
    (&["windy"], WeatherIcon::Windy),
];

impl WeatherIcon {
    /// Pick the icon for a free-text description (case-insensitive)
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        let text = description.to_lowercase();
        KEYWORD_TABLE
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
            .map_or(Self::Sunny, |(_, icon)| *icon)
    }

    /// Emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈️",
            Self::HeavyRain => "🌧️",
            Self::Rain => "🌦️",
            Self::Cloudy => "☁️",
            Self::PartlyCloudy => "⛅",
            Self::Haze => "🌫️",
            Self::Windy => "💨",
            Self::Sunny => "☀️",
        }
    }

    /// CSS class used by the page stylesheet
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "icon-thunderstorm",
            Self::HeavyRain => "icon-heavy-rain",
            Self::Rain => "icon-rain",
            Self::Cloudy => "icon-cloudy",
            Self::PartlyCloudy => "icon-partly-cloudy",
            Self::Haze => "icon-haze",
            Self::Windy => "icon-windy",
            Self::Sunny => "icon-sunny",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emoji())
    }
}
