//! Page anchors the weather panel renders into

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A pre-existing page container, identified by element id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Anchor {
    /// Grid holding one card per forecast day
    ForecastGrid,
    /// Loading indicator
    Loading,
    /// Error panel
    Error,
    /// Current-conditions container
    CurrentConditions,
    /// Screen-reader live region
    LiveRegion,
}

impl Anchor {
    /// Every anchor
    pub const ALL: [Self; 5] = [
        Self::ForecastGrid,
        Self::Loading,
        Self::Error,
        Self::CurrentConditions,
        Self::LiveRegion,
    ];

    /// Element id in the page markup
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::ForecastGrid => "forecast-grid",
            Self::Loading => "weather-loading",
            Self::Error => "weather-error",
            Self::CurrentConditions => "current-conditions",
            Self::LiveRegion => "live-region",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.element_id())
    }
}

impl FromStr for Anchor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|a| a.element_id() == id)
            .ok_or_else(|| DomainError::UnknownAnchor(s.to_string()))
    }
}

impl TryFrom<String> for Anchor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        value.parse()
    }
}

impl From<Anchor> for String {
    fn from(anchor: Anchor) -> Self {
        anchor.element_id().to_string()
    }
}
