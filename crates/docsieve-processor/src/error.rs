//! Error types for the processor

use thiserror::Error;

/// Result type alias for processor operations
pub type Result<T> = std::result::Result<T, ProcessorError>;

/// Errors that can occur while processing one document
///
/// Every variant is scoped to a single document; callers running a batch
/// log the error and move on to the next record.
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Unparseable payload or a missing mandatory envelope field
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The document has no identifier
    #[error("Missing document identifier")]
    MissingIdentifier,

    /// Analyzer failure, propagated from the analyzer
    #[error("Analyzer error: {0}")]
    Analyzer(String),

    /// Structural parser failure, propagated from the parser
    #[error("Parser error: {0}")]
    Parser(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProcessorError {
    /// Whether the document itself is at fault
    ///
    /// A missing identifier counts as malformed input.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ProcessorError::MalformedInput(_) | ProcessorError::MissingIdentifier
        )
    }
}

impl From<serde_json::Error> for ProcessorError {
    fn from(e: serde_json::Error) -> Self {
        ProcessorError::MalformedInput(format!("JSON parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_is_malformed() {
        assert!(ProcessorError::MissingIdentifier.is_malformed_input());
        assert!(ProcessorError::MalformedInput("x".into()).is_malformed_input());
        assert!(!ProcessorError::Analyzer("x".into()).is_malformed_input());
    }

    #[test]
    fn test_json_error_converts_to_malformed() {
        let err: ProcessorError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ProcessorError::MalformedInput(_)));
    }
}
