//! Shorecast CLI
//!
//! Argument parsing and command implementations for the `shorecast` binary.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
pub use commands::run;
