//! Loading/error state of the forecast panel
//!
//! Loading is shown until the forecast either renders or fails. The error
//! panel only reflects the forecast request; current conditions never touch
//! it, and showing it leaves already rendered cards in place.

use domain::Anchor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::PageSurfacePort;

/// Visible state of the forecast panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting for the forecast
    Loading,
    /// Forecast rendered
    Ready,
    /// Forecast request failed or had no usable item
    Failed,
}

/// Toggles the loading and error containers
#[derive(Debug)]
pub struct PanelStateController<'a, S: PageSurfacePort + ?Sized> {
    surface: &'a S,
    state: PanelState,
}

impl<'a, S: PageSurfacePort + ?Sized> PanelStateController<'a, S> {
    /// Create a controller in the idle state
    pub const fn new(surface: &'a S) -> Self {
        Self {
            surface,
            state: PanelState::Idle,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    fn set(&self, anchor: Anchor, visible: bool) {
        if self.surface.has_anchor(anchor) {
            self.surface.set_visible(anchor, visible);
        } else {
            debug!(%anchor, "Anchor missing, skipping visibility change");
        }
    }

    /// Show loading, hide a stale error from a previous run
    pub fn begin(&mut self) {
        self.set(Anchor::Error, false);
        self.set(Anchor::Loading, true);
        self.state = PanelState::Loading;
    }

    /// Forecast rendered: hide loading
    pub fn forecast_ready(&mut self) {
        self.set(Anchor::Loading, false);
        self.state = PanelState::Ready;
    }

    /// Forecast failed: hide loading, show error
    pub fn forecast_failed(&mut self) {
        self.set(Anchor::Loading, false);
        self.set(Anchor::Error, true);
        self.state = PanelState::Failed;
    }
}
