//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Unlike per-document [`docsieve_processor::ProcessorError`]s, these abort
/// the run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Processor error outside document scope
    #[error("Processor error: {0}")]
    Processor(#[from] docsieve_processor::ProcessorError),

    /// Analyzer setup error
    #[error("Analyzer error: {0}")]
    Analysis(#[from] docsieve_analysis::AnalysisError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
