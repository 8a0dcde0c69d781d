//! Test doubles shared by the service tests

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use domain::{
    Anchor, CurrentConditionItem, ForecastDay, Metric, ReadingBatch, ReadingRange, StationReading,
    UvIndex,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::error::ApplicationError;
use crate::ports::{
    AnnouncerPort, CardId, ConditionCard, ForecastCard, ForecastItem, PageSurfacePort, Politeness,
    WeatherPort,
};

#[derive(Debug, Default)]
struct SurfaceState {
    next_id: u64,
    visible: HashMap<Anchor, bool>,
    visibility_changes: usize,
    forecast: Vec<(CardId, ForecastCard)>,
    conditions: Vec<(CardId, ConditionCard)>,
    revealed: Vec<CardId>,
}

/// In-memory page that records every call
#[derive(Debug)]
pub struct RecordingSurface {
    anchors: HashSet<Anchor>,
    state: Mutex<SurfaceState>,
}

impl RecordingSurface {
    /// A page with every anchor
    pub fn new() -> Self {
        Self::with_anchors(&Anchor::ALL)
    }

    /// A page with only the given anchors
    pub fn with_anchors(anchors: &[Anchor]) -> Self {
        Self {
            anchors: anchors.iter().copied().collect(),
            state: Mutex::new(SurfaceState::default()),
        }
    }

    pub fn is_visible(&self, anchor: Anchor) -> bool {
        self.state.lock().visible.get(&anchor).copied().unwrap_or(false)
    }

    pub fn visibility_changes(&self) -> usize {
        self.state.lock().visibility_changes
    }

    pub fn forecast_cards(&self) -> Vec<ForecastCard> {
        self.state.lock().forecast.iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn condition_cards(&self) -> Vec<ConditionCard> {
        self.state.lock().conditions.iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn revealed(&self) -> Vec<CardId> {
        self.state.lock().revealed.clone()
    }
}

impl PageSurfacePort for RecordingSurface {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }

    fn set_visible(&self, anchor: Anchor, visible: bool) {
        let mut state = self.state.lock();
        state.visible.insert(anchor, visible);
        state.visibility_changes += 1;
    }

    fn clear(&self, anchor: Anchor) {
        let mut state = self.state.lock();
        match anchor {
            Anchor::ForecastGrid => state.forecast.clear(),
            Anchor::CurrentConditions => state.conditions.clear(),
            _ => {},
        }
    }

    fn append_forecast_card(&self, card: &ForecastCard) -> CardId {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = CardId(state.next_id);
        state.forecast.push((id, card.clone()));
        id
    }

    fn append_condition_card(&self, card: &ConditionCard) -> CardId {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = CardId(state.next_id);
        state.conditions.push((id, card.clone()));
        id
    }

    fn reveal(&self, card: CardId) {
        self.state.lock().revealed.push(card);
    }
}

/// Announcer that keeps every message
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    messages: Mutex<Vec<(String, Politeness)>>,
}

impl RecordingAnnouncer {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().iter().map(|(m, _)| m.clone()).collect()
    }
}

impl AnnouncerPort for RecordingAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        self.messages.lock().push((message.to_string(), politeness));
    }
}

/// Weather port whose forecast request waits until [`GatedWeather::open`]
#[derive(Debug)]
pub struct GatedWeather {
    days: Vec<ForecastDay>,
    gate: Notify,
}

impl GatedWeather {
    pub fn new(days: Vec<ForecastDay>) -> Self {
        Self {
            days,
            gate: Notify::new(),
        }
    }

    /// Release the pending forecast request
    pub fn open(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl WeatherPort for GatedWeather {
    async fn get_forecast(&self) -> Result<Vec<ForecastItem>, ApplicationError> {
        self.gate.notified().await;
        Ok(vec![ForecastItem {
            issued_at: None,
            days: self.days.clone(),
        }])
    }

    async fn get_readings(&self, _metric: Metric) -> Result<Vec<ReadingBatch>, ApplicationError> {
        Ok(vec![station_batch(&["S01"])])
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Consecutive days from 2024-06-03, one per description
pub fn sample_days(descriptions: &[&str]) -> Vec<ForecastDay> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| ForecastDay {
            date: start.checked_add_days(Days::new(i as u64)).unwrap(),
            description: (*description).to_string(),
            temperature: ReadingRange::new(25.0, 33.0).unwrap(),
            relative_humidity: ReadingRange::new(60.0, 95.0).unwrap(),
            wind: ReadingRange::new(10.0, 20.0).unwrap(),
        })
        .collect()
}

/// One batch with a reading per station id, values 1.0, 2.0, ...
pub fn station_batch(station_ids: &[&str]) -> ReadingBatch {
    ReadingBatch::new(
        station_ids
            .iter()
            .enumerate()
            .map(|(i, id)| StationReading::new(*id, (i + 1) as f64))
            .collect(),
    )
}

/// Temperature reading plus a UV estimate
pub fn sample_conditions() -> Vec<CurrentConditionItem> {
    vec![
        CurrentConditionItem::from_reading(Metric::Temperature, &StationReading::new("S50", 30.4)),
        CurrentConditionItem::from_uv(UvIndex::new(8)),
    ]
}
