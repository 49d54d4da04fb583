// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] srcdump_engine::error::EngineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] srcdump_engine::config::ScanConfigBuilderError),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
