//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shorecast CLI
#[derive(Debug, Parser)]
#[command(name = "shorecast")]
#[command(author, version, about = "Beach-cleanup weather panel renderer", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "SHORECAST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the weather and write the full HTML page
    ///
    /// Example: shorecast render --output public/weather.html
    Render {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the weather and print a plain-text summary
    Forecast,

    /// Check that the forecast endpoint answers
    Check,

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
///
/// Zero means "use the configured filter".
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
