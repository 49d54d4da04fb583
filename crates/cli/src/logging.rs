// crates/cli/src/logging.rs
//! Diagnostics go to stderr so stdout carries only the report.
//!
//! The engine logs through the `log` facade; the subscriber installed here
//! picks those records up through its `tracing-log` bridge.

use crate::error::{AppError, Result};
use tracing_subscriber::filter::LevelFilter;

/// Map `-q` / `-v` flags to a level. Warnings are shown by default.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global stderr subscriber.
///
/// # Errors
/// Fails if a global subscriber or `log` logger is already installed.
pub fn init(level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
