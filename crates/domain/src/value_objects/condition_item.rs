//! Display-ready current-condition cards

use serde::{Deserialize, Serialize};

use super::{Metric, StationReading, UvIndex};

/// What a condition card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// A measured metric
    Metric(Metric),
    /// The synthesized UV estimate
    UvIndex,
}

/// One card in the current-conditions panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditionItem {
    /// What this card shows
    pub kind: ConditionKind,
    /// Icon
    pub icon: String,
    /// Label, e.g. "Temperature"
    pub label: String,
    /// Formatted value without unit
    pub value: String,
    /// Unit, e.g. "°C"
    pub unit: String,
    /// Secondary line: station name for readings, band for UV
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CurrentConditionItem {
    /// Project a selected station reading
    #[must_use]
    pub fn from_reading(metric: Metric, reading: &StationReading) -> Self {
        Self {
            kind: ConditionKind::Metric(metric),
            icon: metric.icon().to_string(),
            label: metric.label().to_string(),
            value: metric.format_value(reading.value),
            unit: metric.unit().to_string(),
            note: Some(reading.display_name().to_string()),
        }
    }

    /// Project a UV estimate
    #[must_use]
    pub fn from_uv(uv: UvIndex) -> Self {
        Self {
            kind: ConditionKind::UvIndex,
            icon: "☀️".to_string(),
            label: "UV Index".to_string(),
            value: uv.to_string(),
            unit: String::new(),
            note: Some(format!("{} (est.)", uv.band().label())),
        }
    }
}
