//! Command implementations
//!
//! Every command writes its result to the given writer so it can be
//! exercised without a terminal.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::{
    AnnouncerPort, Component, Startup, StartupEntry, StartupStatus, WeatherPanel, WeatherPort,
};
use infrastructure::{
    AppConfig, FanoutAnnouncer, HtmlPage, RandomUvEstimator, TemplateConfig, TemplateEngine,
    TracingAnnouncer, WeatherAdapter,
};
use tracing::{info, warn};

use crate::cli::Commands;

/// Run a command
pub async fn run<W: Write + Send>(
    command: Commands,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Render { output } => render(config, output.as_deref(), out).await,
        Commands::Forecast => forecast(config, out).await,
        Commands::Check => check(config, out).await,
        Commands::Config => {
            out.write_all(config.to_toml()?.as_bytes())?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn weather(config: &AppConfig) -> anyhow::Result<WeatherAdapter> {
    WeatherAdapter::with_config((&config.weather).into())
        .context("Failed to create weather client")
}

fn page(config: &AppConfig) -> anyhow::Result<Arc<HtmlPage>> {
    let engine = TemplateEngine::with_config(TemplateConfig {
        templates_dir: config.page.templates_dir.clone(),
        auto_escape: true,
    })
    .context("Failed to load templates")?;
    Ok(Arc::new(HtmlPage::new(
        config.page.title.clone(),
        config.page.anchors.iter().copied(),
        engine,
    )))
}

/// Build the page, start its components and return it with the startup report
async fn load_page(config: &AppConfig) -> anyhow::Result<(Arc<HtmlPage>, Vec<StartupEntry>)> {
    let page = page(config)?;
    let announcer: Arc<dyn AnnouncerPort> = Arc::new(FanoutAnnouncer::new(vec![
        page.clone(),
        Arc::new(TracingAnnouncer),
    ]));
    let uv = RandomUvEstimator::new(config.page.timezone()?);

    let panel = WeatherPanel::attach(
        Arc::new(weather(config)?),
        page.clone(),
        announcer,
        Arc::new(uv),
        config.pipeline_config(),
    );
    if let Component::Inactive { missing, .. } = &panel {
        warn!(%missing, "Weather panel disabled");
    }

    let entries = Startup::new().with(panel).run().await;
    Ok((page, entries))
}

/// Success unless a component started in a degraded state
fn exit_code(entries: &[StartupEntry]) -> ExitCode {
    if entries
        .iter()
        .any(|e| matches!(e.status, StartupStatus::Degraded { .. }))
    {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn render<W: Write + Send>(
    config: &AppConfig,
    output: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    let (page, entries) = load_page(config).await?;
    let html = page.render_html()?;

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "Page written");
        },
        None => out.write_all(html.as_bytes())?,
    }
    Ok(exit_code(&entries))
}

async fn forecast<W: Write + Send>(config: &AppConfig, out: &mut W) -> anyhow::Result<ExitCode> {
    let (page, entries) = load_page(config).await?;
    out.write_all(page.render_summary()?.as_bytes())?;
    Ok(exit_code(&entries))
}

async fn check<W: Write + Send>(config: &AppConfig, out: &mut W) -> anyhow::Result<ExitCode> {
    let healthy = weather(config)?.is_available().await;
    if healthy {
        writeln!(out, "✅ Weather service reachable at {}", config.weather.base_url)?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(out, "❌ Weather service unavailable at {}", config.weather.base_url)?;
        Ok(ExitCode::FAILURE)
    }
}
