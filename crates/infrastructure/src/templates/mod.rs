//! Template engine for the weather panel
//!
//! Uses Tera with embedded templates for:
//! - the full page with every weather container (`page.html`)
//! - forecast and condition cards (`weather/*.html`)
//! - the plain-text forecast summary (`weather/summary.txt`)
//!
//! # Template Locations
//!
//! Templates can be loaded from:
//! - Embedded templates (compile-time)
//! - A directory on the file system; files there replace embedded templates
//!   of the same relative name
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_page(&page.snapshot())?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use application::{CardId, ConditionCard, ForecastCard, Politeness};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Invalid template context
    #[error("Invalid context: {0}")]
    Context(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Build a context from a serializable struct
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, TemplateError> {
        Context::from_serialize(value)
            .map(|inner| Self { inner })
            .map_err(|e| TemplateError::Context(e.to_string()))
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Which weather containers the page has
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorFlags {
    pub forecast_grid: bool,
    pub loading: bool,
    pub error: bool,
    pub current_conditions: bool,
    pub live_region: bool,
}

/// A card together with its page state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView<T> {
    /// Card handle
    pub id: CardId,
    /// Whether the card has been revealed
    pub revealed: bool,
    /// Card content
    #[serde(flatten)]
    pub card: T,
}

/// A live-region announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
    /// Value for the `aria-live` attribute
    pub aria_live: &'static str,
}

impl Announcement {
    #[must_use]
    pub fn new(message: impl Into<String>, politeness: Politeness) -> Self {
        Self {
            message: message.into(),
            politeness,
            aria_live: politeness.aria_live(),
        }
    }
}

/// Everything the page templates render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    /// Page title
    pub title: String,
    /// Containers present on the page
    pub anchors: AnchorFlags,
    /// Loading indicator visibility
    pub loading_visible: bool,
    /// Error message visibility
    pub error_visible: bool,
    /// Forecast grid contents
    pub forecast: Vec<CardView<ForecastCard>>,
    /// Current-conditions contents
    pub conditions: Vec<CardView<ConditionCard>>,
    /// Latest live-region announcement
    pub live: Option<Announcement>,
}

/// Template engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path to custom templates directory (optional)
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Whether to auto-escape HTML by default
    #[serde(default = "default_true")]
    pub auto_escape: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            auto_escape: true,
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
</head>
<body>
    <section class="weather" aria-labelledby="weather-heading">
        <h2 id="weather-heading">Beach Weather</h2>
{% if anchors.loading %}        <div id="weather-loading" class="weather-loading"{% if not loading_visible %} hidden{% endif %}>Loading forecast…</div>
{% endif %}{% if anchors.error %}        <div id="weather-error" class="weather-error" role="alert"{% if not error_visible %} hidden{% endif %}>Weather forecast is currently unavailable. Please try again later.</div>
{% endif %}{% if anchors.forecast_grid %}        <div id="forecast-grid" class="forecast-grid">
{% for card in forecast %}{% include "weather/forecast_card.html" %}{% endfor %}        </div>
{% endif %}{% if anchors.current_conditions %}        <div id="current-conditions" class="current-conditions">
{% for card in conditions %}{% include "weather/condition_card.html" %}{% endfor %}        </div>
{% endif %}    </section>
{% if anchors.live_region %}    <div id="live-region" class="sr-only" aria-live="{% if live %}{{ live.aria_live }}{% else %}polite{% endif %}" aria-atomic="true">{% if live %}{{ live.message }}{% endif %}</div>
{% endif %}</body>
</html>
"#;

    pub const FORECAST_CARD: &str = r#"            <article class="forecast-card{% if card.is_today %} today{% endif %}{% if not card.revealed %} pending{% endif %}" data-card-id="{{ card.id }}" style="animation-delay: {{ card.reveal_delay_ms }}ms">
                <h3 class="forecast-day">{{ card.day_label }}</h3>
                <p class="forecast-date">{{ card.date_label }}</p>
                <div class="forecast-icon {{ card.icon_class }}" aria-hidden="true">{{ card.icon_emoji }}</div>
                <p class="forecast-description">{{ card.description }}</p>
                <dl class="forecast-details">
                    <dt>Temperature</dt><dd>{{ card.temperature }}</dd>
                    <dt>Humidity</dt><dd>{{ card.humidity }}</dd>
                    <dt>Wind</dt><dd>{{ card.wind }}</dd>
                </dl>
            </article>
"#;

    pub const CONDITION_CARD: &str = r#"            <div class="condition-card{% if not card.revealed %} pending{% endif %}" data-card-id="{{ card.id }}" style="animation-delay: {{ card.reveal_delay_ms }}ms">
                <span class="condition-icon" aria-hidden="true">{{ card.item.icon }}</span>
                <span class="condition-label">{{ card.item.label }}</span>
                <span class="condition-value">{{ card.item.value }}{{ card.item.unit }}</span>
{% if card.item.note %}                <span class="condition-note">{{ card.item.note }}</span>
{% endif %}            </div>
"#;

    pub const SUMMARY: &str = r"{{ title }} weather
{% if error_visible %}
Weather forecast is currently unavailable.
{% endif %}{% if forecast %}
{% for card in forecast %}{{ card.icon_emoji }} {{ card.day_label }} ({{ card.date_label }}): {{ card.description | truncate_words(count=6) }}, {{ card.temperature }}, humidity {{ card.humidity }}, wind {{ card.wind }}
{% endfor %}{% endif %}{% if conditions %}
Current conditions:
{% for card in conditions %}  {{ card.item.icon }} {{ card.item.label }}: {{ card.item.value }}{{ card.item.unit }}{% if card.item.note %} ({{ card.item.note }}){% endif %}
{% endfor %}{% endif %}";
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Name of the full page template
    pub const PAGE: &'static str = "page.html";
    /// Name of the text summary template
    pub const SUMMARY: &'static str = "weather/summary.txt";

    /// Create a new template engine with default configuration
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        tera.autoescape_on(if config.auto_escape {
            vec![".html", ".htm", ".xml"]
        } else {
            vec![]
        });

        tera.register_filter("truncate_words", truncate_words_filter);

        tera.add_raw_templates(vec![
            (Self::PAGE, embedded::PAGE),
            ("weather/forecast_card.html", embedded::FORECAST_CARD),
            ("weather/condition_card.html", embedded::CONDITION_CARD),
            (Self::SUMMARY, embedded::SUMMARY),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        if let Some(ref dir) = config.templates_dir {
            let root = Path::new(dir);
            let mut files = Vec::new();
            collect_template_files(root, root, &mut files)
                .map_err(|e| TemplateError::Compile(format!("{dir}: {e}")))?;
            for (_, name) in &files {
                debug!(template = %name, "Loaded custom template");
            }
            tera.add_template_files(
                files
                    .iter()
                    .map(|(path, name)| (path.as_path(), Some(name.as_str()))),
            )
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
            info!(dir = %dir, count = files.len(), "Loaded custom templates");
        }

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the full page
    pub fn render_page(&self, snapshot: &PageSnapshot) -> Result<String, TemplateError> {
        self.render(Self::PAGE, &TemplateContext::from_serialize(snapshot)?)
    }

    /// Render the plain-text summary
    pub fn render_summary(&self, snapshot: &PageSnapshot) -> Result<String, TemplateError> {
        self.render(Self::SUMMARY, &TemplateContext::from_serialize(snapshot)?)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// List all available template names
    #[must_use]
    pub fn list_templates(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}

/// Collect every file below `dir` with its `/`-separated name relative to `root`
fn collect_template_files(
    root: &Path,
    dir: &Path,
    out: &mut Vec<(PathBuf, String)>,
) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_template_files(root, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push((path.clone(), name));
        }
    }
    Ok(())
}

/// Custom filter: Truncate to a number of words
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_words_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("truncate_words requires a string"))?;

    let count = args.get("count").and_then(Value::as_i64).unwrap_or(20) as usize;

    let words: Vec<&str> = s.split_whitespace().collect();
    if words.len() <= count {
        return Ok(Value::String(s.to_string()));
    }

    let truncated = words[..count].join(" ");
    Ok(Value::String(format!("{truncated}...")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{CurrentConditionItem, Metric, StationReading, UvIndex, WeatherIcon};

    use super::*;

    fn forecast_card(index: usize, description: &str) -> CardView<ForecastCard> {
        let icon = WeatherIcon::from_description(description);
        CardView {
            id: CardId(index as u64 + 1),
            revealed: true,
            card: ForecastCard {
                index,
                is_today: index == 0,
                day_label: if index == 0 { "Today".into() } else { "Tue".into() },
                date_label: "3 Jun".into(),
                date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                icon,
                icon_emoji: icon.emoji().into(),
                icon_class: icon.css_class().into(),
                description: description.into(),
                temperature: "25–33°C".into(),
                humidity: "60–95%".into(),
                wind: "10–20 km/h".into(),
                reveal_delay_ms: index as u64 * 100,
            },
        }
    }

    fn snapshot() -> PageSnapshot {
        PageSnapshot {
            title: "Shorecast".into(),
            anchors: AnchorFlags {
                forecast_grid: true,
                loading: true,
                error: true,
                current_conditions: true,
                live_region: true,
            },
            loading_visible: false,
            error_visible: false,
            forecast: vec![
                forecast_card(0, "Thundery Showers"),
                forecast_card(1, "Fair & Warm"),
            ],
            conditions: vec![
                CardView {
                    id: CardId(3),
                    revealed: true,
                    card: ConditionCard {
                        index: 0,
                        item: CurrentConditionItem::from_reading(
                            Metric::Temperature,
                            &StationReading::new("S107", 30.4).with_name("East Coast Parkway"),
                        ),
                        reveal_delay_ms: 0,
                    },
                },
                CardView {
                    id: CardId(4),
                    revealed: false,
                    card: ConditionCard {
                        index: 1,
                        item: CurrentConditionItem::from_uv(UvIndex::new(8)),
                        reveal_delay_ms: 100,
                    },
                },
            ],
            live: Some(Announcement::new("Current conditions updated", Politeness::Polite)),
        }
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_page_rendering() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_page(&snapshot()).unwrap();

        assert!(html.contains(r#"id="forecast-grid""#));
        assert!(html.contains(r#"id="current-conditions""#));
        assert_eq!(html.matches("<article class=\"forecast-card").count(), 2);
        assert_eq!(html.matches("forecast-card today").count(), 1);
        assert!(html.contains("icon-thunderstorm"));
        assert!(html.contains("Fair &amp; Warm"));
        assert!(html.contains("East Coast Parkway"));
        assert!(html.contains("condition-card pending"));
        assert!(html.contains(r#"aria-live="polite""#));
        assert!(html.contains("Current conditions updated"));
        assert!(html.contains(r#"id="weather-loading" class="weather-loading" hidden"#));
    }

    #[test]
    fn test_page_without_optional_containers() {
        let engine = TemplateEngine::new().unwrap();
        let mut snapshot = snapshot();
        snapshot.anchors.current_conditions = false;
        snapshot.anchors.live_region = false;
        snapshot.anchors.loading = false;

        let html = engine.render_page(&snapshot).unwrap();
        assert!(!html.contains("current-conditions"));
        assert!(!html.contains("live-region"));
        assert!(!html.contains("weather-loading"));
        assert!(html.contains("forecast-grid"));
    }

    #[test]
    fn test_error_state_rendering() {
        let engine = TemplateEngine::new().unwrap();
        let mut snapshot = snapshot();
        snapshot.forecast.clear();
        snapshot.conditions.clear();
        snapshot.error_visible = true;
        snapshot.live = Some(Announcement::new(
            "Weather forecast is currently unavailable",
            Politeness::Assertive,
        ));

        let html = engine.render_page(&snapshot).unwrap();
        assert!(html.contains(r#"role="alert">"#));
        assert!(html.contains(r#"aria-live="assertive""#));

        let text = engine.render_summary(&snapshot).unwrap();
        assert!(text.contains("Weather forecast is currently unavailable."));
    }

    #[test]
    fn test_summary_rendering() {
        let engine = TemplateEngine::new().unwrap();
        let text = engine.render_summary(&snapshot()).unwrap();

        assert!(text.starts_with("Shorecast weather"));
        assert!(text.contains("Today (3 Jun): Thundery Showers, 25–33°C"));
        assert!(text.contains("Fair & Warm"));
        assert!(text.contains("Temperature: 30.4°C (East Coast Parkway)"));
        assert!(text.contains("UV Index: 8"));
    }

    #[test]
    fn test_template_listing() {
        let engine = TemplateEngine::new().unwrap();
        let templates = engine.list_templates();

        assert!(templates.contains(&"page.html"));
        assert!(templates.contains(&"weather/summary.txt"));
        assert!(engine.template_exists("weather/forecast_card.html"));
        assert!(!engine.template_exists("nonexistent/template.txt"));
    }

    #[test]
    fn test_custom_templates_override_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("weather")).unwrap();
        std::fs::write(
            dir.path().join("weather/summary.txt"),
            "{{ forecast | length }} days",
        )
        .unwrap();

        let engine = TemplateEngine::with_config(TemplateConfig {
            templates_dir: Some(dir.path().to_string_lossy().into_owned()),
            auto_escape: true,
        })
        .unwrap();

        assert_eq!(engine.render_summary(&snapshot()).unwrap(), "2 days");
        assert!(engine.template_exists("page.html"));
    }

    #[test]
    fn test_missing_template_dir_fails() {
        let result = TemplateEngine::with_config(TemplateConfig {
            templates_dir: Some("/nonexistent/templates".into()),
            auto_escape: true,
        });
        assert!(matches!(result, Err(TemplateError::Compile(_))));
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("missing.html", &TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_truncate_words_filter() {
        let value = Value::String("one two three four five six".to_string());
        let mut args = HashMap::new();
        args.insert("count".to_string(), Value::Number(3.into()));

        let result = truncate_words_filter(&value, &args).unwrap();
        assert_eq!(result.as_str().unwrap(), "one two three...");
    }
}
