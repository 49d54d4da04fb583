// crates/cli/src/presentation.rs
use crate::error::Result;
use srcdump_engine::config::ScanConfig;
use srcdump_engine::record::ScanSummary;
use std::io::{self, BufWriter, Write};

/// Write the report for `config` to stdout.
///
/// # Errors
/// See [`dump_to`].
pub fn dump(config: &ScanConfig) -> Result<ScanSummary> {
    let stdout = io::stdout();
    dump_to(config, BufWriter::new(stdout.lock()))
}

/// Write the report for `config` to `out`.
///
/// A reader closing the pipe early (`srcdump | head`) ends the run quietly
/// and is not an error.
///
/// # Errors
/// Any other failure to write to `out`.
pub fn dump_to<W: Write>(config: &ScanConfig, mut out: W) -> Result<ScanSummary> {
    match srcdump_engine::run(config, &mut out) {
        Ok(summary) => Ok(summary),
        Err(e) if e.is_broken_pipe() => {
            log::debug!("output closed early; stopping");
            Ok(ScanSummary::default())
        }
        Err(e) => Err(e.into()),
    }
}
