// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use srcdump_engine::config::DEFAULT_SUFFIX;

use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "srcdump",
    version = crate::VERSION,
    about = "Print the path and contents of every file with a given suffix under a directory"
)]
pub struct Args {
    /// Directory to scan recursively
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// File-name suffix to select, case-sensitive (comma-separated or repeated)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = DEFAULT_SUFFIX,
        value_parser = parsers::parse_suffix,
        help_heading = "Selection"
    )]
    pub suffix: Vec<String>,

    /// Show more diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Diagnostics")]
    pub verbose: u8,

    /// Suppress all diagnostics on stderr
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Diagnostics")]
    pub quiet: bool,
}
