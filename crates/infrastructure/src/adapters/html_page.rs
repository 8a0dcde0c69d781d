//! In-memory HTML page
//!
//! Implements the page surface and the announcer over an in-memory model of
//! the weather section. The model renders to HTML or plain text through the
//! template engine once the pipeline has run.

use std::collections::{HashMap, HashSet};

use application::ports::{
    AnnouncerPort, CardId, ConditionCard, ForecastCard, PageSurfacePort, Politeness,
};
use domain::Anchor;
use parking_lot::Mutex;
use tracing::debug;

use crate::templates::{
    AnchorFlags, Announcement, CardView, PageSnapshot, TemplateEngine, TemplateError,
};

#[derive(Debug, Default)]
struct PageState {
    next_id: u64,
    visible: HashMap<Anchor, bool>,
    forecast: Vec<CardView<ForecastCard>>,
    conditions: Vec<CardView<ConditionCard>>,
    announcements: Vec<Announcement>,
}

impl PageState {
    fn next_id(&mut self) -> CardId {
        self.next_id += 1;
        CardId(self.next_id)
    }
}

/// The weather section of the landing page
#[derive(Debug)]
pub struct HtmlPage {
    title: String,
    anchors: HashSet<Anchor>,
    engine: TemplateEngine,
    state: Mutex<PageState>,
}

impl HtmlPage {
    /// Create a page with the given containers
    pub fn new(
        title: impl Into<String>,
        anchors: impl IntoIterator<Item = Anchor>,
        engine: TemplateEngine,
    ) -> Self {
        Self {
            title: title.into(),
            anchors: anchors.into_iter().collect(),
            engine,
            state: Mutex::new(PageState::default()),
        }
    }

    fn flags(&self) -> AnchorFlags {
        AnchorFlags {
            forecast_grid: self.anchors.contains(&Anchor::ForecastGrid),
            loading: self.anchors.contains(&Anchor::Loading),
            error: self.anchors.contains(&Anchor::Error),
            current_conditions: self.anchors.contains(&Anchor::CurrentConditions),
            live_region: self.anchors.contains(&Anchor::LiveRegion),
        }
    }

    /// Current page model
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.state.lock();
        let visible = |anchor: Anchor| state.visible.get(&anchor).copied().unwrap_or(false);
        PageSnapshot {
            title: self.title.clone(),
            anchors: self.flags(),
            loading_visible: visible(Anchor::Loading),
            error_visible: visible(Anchor::Error),
            forecast: state.forecast.clone(),
            conditions: state.conditions.clone(),
            live: state.announcements.last().cloned(),
        }
    }

    /// Every announcement made so far, oldest first
    pub fn announcements(&self) -> Vec<Announcement> {
        self.state.lock().announcements.clone()
    }

    /// Render the full page
    pub fn render_html(&self) -> Result<String, TemplateError> {
        self.engine.render_page(&self.snapshot())
    }

    /// Render the plain-text summary
    pub fn render_summary(&self) -> Result<String, TemplateError> {
        self.engine.render_summary(&self.snapshot())
    }
}

impl PageSurfacePort for HtmlPage {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }

    fn set_visible(&self, anchor: Anchor, visible: bool) {
        self.state.lock().visible.insert(anchor, visible);
    }

    fn clear(&self, anchor: Anchor) {
        let mut state = self.state.lock();
        match anchor {
            Anchor::ForecastGrid => state.forecast.clear(),
            Anchor::CurrentConditions => state.conditions.clear(),
            Anchor::Loading | Anchor::Error | Anchor::LiveRegion => {},
        }
    }

    fn append_forecast_card(&self, card: &ForecastCard) -> CardId {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.forecast.push(CardView {
            id,
            revealed: false,
            card: card.clone(),
        });
        id
    }

    fn append_condition_card(&self, card: &ConditionCard) -> CardId {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.conditions.push(CardView {
            id,
            revealed: false,
            card: card.clone(),
        });
        id
    }

    fn reveal(&self, card: CardId) {
        let mut state = self.state.lock();
        let state = &mut *state;
        let flag = state
            .forecast
            .iter_mut()
            .map(|c| (c.id, &mut c.revealed))
            .chain(state.conditions.iter_mut().map(|c| (c.id, &mut c.revealed)))
            .find(|(id, _)| *id == card);
        match flag {
            Some((_, revealed)) => *revealed = true,
            None => debug!(?card, "Reveal of unknown card ignored"),
        }
    }
}

impl AnnouncerPort for HtmlPage {
    fn announce(&self, message: &str, politeness: Politeness) {
        if !self.has_anchor(Anchor::LiveRegion) {
            debug!(announcement = %message, "No live region, announcement dropped");
            return;
        }
        self.state
            .lock()
            .announcements
            .push(Announcement::new(message, politeness));
    }
}
