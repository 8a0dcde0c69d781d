//! Shorecast CLI
//!
//! Renders the beach-cleanup landing page weather panel.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, init_telemetry};
use shorecast_cli::{Cli, log_filter_from_verbosity, run};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    init_telemetry(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;

    run(cli.command, &config, &mut std::io::stdout()).await
}
