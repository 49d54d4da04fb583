// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use srcdump_engine::config::{ScanConfig, ScanConfigBuilder};

impl TryFrom<Args> for ScanConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(ScanConfigBuilder::default()
            .root(args.root)
            .suffixes(args.suffix)
            .build()?)
    }
}
