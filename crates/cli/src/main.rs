use clap::Parser;
use srcdump_cli::args::Args;
use srcdump_cli::config::ScanConfig;
use srcdump_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(logging::level_for(args.verbose, args.quiet)) {
        eprintln!("{e}");
    }

    let config = match ScanConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Application Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match presentation::dump(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
