//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SDK error
    #[error("{0}")]
    Sdk(#[from] factlens_sdk::SdkError),

    /// Local extraction error
    #[error("Extraction error: {0}")]
    Extractor(#[from] factlens_extractor::ExtractorError),

    /// A newer extraction superseded this one
    #[error("Discarded stale extraction: {0}")]
    Stale(#[from] factlens_domain::StaleTicket),

    /// Claims could not be laid out over the text
    #[error("Highlight error: {0}")]
    Highlight(#[from] factlens_domain::HighlightError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),

    /// No claim matches the given id or index
    #[error("No claim matches '{0}'. Use 'claims' to list them.")]
    UnknownClaim(String),
}
