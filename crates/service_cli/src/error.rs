//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `option-pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A pricing input was rejected.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the report as JSON failed.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
