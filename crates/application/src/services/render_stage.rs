//! Render stage
//!
//! Turns forecast days and condition items into display cards, appends them
//! hidden and reveals them one after another.

use std::time::Duration;

use domain::{Anchor, CurrentConditionItem, ForecastDay};
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::ports::{CardId, ConditionCard, ForecastCard, PageSurfacePort};

/// Default gap between two card reveals
pub const DEFAULT_REVEAL_STEP: Duration = Duration::from_millis(100);

/// Builds and places cards
#[derive(Debug, Clone, Copy)]
pub struct RenderStage {
    reveal_step: Duration,
}

impl Default for RenderStage {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_STEP)
    }
}

impl RenderStage {
    /// Create a stage with the given reveal step
    #[must_use]
    pub const fn new(reveal_step: Duration) -> Self {
        Self { reveal_step }
    }

    /// Delay before the card at `index` is revealed
    #[must_use]
    pub fn reveal_delay(&self, index: usize) -> Duration {
        self.reveal_step
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    fn reveal_delay_ms(&self, index: usize) -> u64 {
        u64::try_from(self.reveal_delay(index).as_millis()).unwrap_or(u64::MAX)
    }

    /// Build forecast cards, preserving input order
    #[must_use]
    pub fn forecast_cards(&self, days: &[ForecastDay]) -> Vec<ForecastCard> {
        days.iter()
            .enumerate()
            .map(|(index, day)| {
                let icon = day.icon();
                ForecastCard {
                    index,
                    is_today: index == 0,
                    day_label: day.day_label(index),
                    date_label: day.date.format("%-d %b").to_string(),
                    date: day.date,
                    icon,
                    icon_emoji: icon.emoji().to_string(),
                    icon_class: icon.css_class().to_string(),
                    description: day.description.clone(),
                    temperature: day.temperature.format_with_unit("°C"),
                    humidity: day.relative_humidity.format_with_unit("%"),
                    wind: day.wind.format_with_unit(" km/h"),
                    reveal_delay_ms: self.reveal_delay_ms(index),
                }
            })
            .collect()
    }

    /// Build condition cards, preserving input order
    #[must_use]
    pub fn condition_cards(&self, items: &[CurrentConditionItem]) -> Vec<ConditionCard> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| ConditionCard {
                index,
                item: item.clone(),
                reveal_delay_ms: self.reveal_delay_ms(index),
            })
            .collect()
    }

    /// Replace the forecast grid's cards; returns the new card handles
    pub fn render_forecast<S: PageSurfacePort + ?Sized>(
        &self,
        surface: &S,
        days: &[ForecastDay],
    ) -> Vec<CardId> {
        surface.clear(Anchor::ForecastGrid);
        let ids: Vec<_> = self
            .forecast_cards(days)
            .iter()
            .map(|card| surface.append_forecast_card(card))
            .collect();
        debug!(cards = ids.len(), "Rendered forecast cards");
        ids
    }

    /// Replace the conditions container's cards; returns the new card handles
    ///
    /// A page without the conditions container gets nothing.
    pub fn render_conditions<S: PageSurfacePort + ?Sized>(
        &self,
        surface: &S,
        items: &[CurrentConditionItem],
    ) -> Vec<CardId> {
        if !surface.has_anchor(Anchor::CurrentConditions) {
            debug!("No conditions container, skipping");
            return Vec::new();
        }
        surface.clear(Anchor::CurrentConditions);
        let ids: Vec<_> = self
            .condition_cards(items)
            .iter()
            .map(|card| surface.append_condition_card(card))
            .collect();
        debug!(cards = ids.len(), "Rendered condition cards");
        ids
    }

    /// Reveal cards at `index * reveal_step` from now
    pub async fn reveal<S: PageSurfacePort + ?Sized>(&self, surface: &S, ids: &[CardId]) {
        let start = Instant::now();
        for (index, id) in ids.iter().enumerate() {
            let delay = self.reveal_delay(index);
            if !delay.is_zero() {
                sleep_until(start + delay).await;
            }
            surface.reveal(*id);
        }
    }
}
