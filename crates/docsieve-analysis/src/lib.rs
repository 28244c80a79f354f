//! docsieve Analysis Layer
//!
//! Implementations of the `Analyzer` trait from `docsieve-domain`.
//!
//! # Architecture
//!
//! An analyzer is an opaque, deterministic function from raw text (plus a
//! field hint) to the text form of a token stream. The noise-removal pipeline
//! never looks inside it.
//!
//! # Analyzers
//!
//! - `EnglishAnalyzer`: tokenize, lowercase, drop stopwords, Snowball stem
//! - `MockAnalyzer`: identity analyzer that records its calls, for testing
//!
//! # Examples
//!
//! ```
//! use docsieve_analysis::MockAnalyzer;
//! use docsieve_domain::traits::Analyzer;
//!
//! let analyzer = MockAnalyzer::new();
//! assert_eq!(analyzer.analyze("Hello there", "content").unwrap(), "Hello there");
//! assert_eq!(analyzer.call_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod english;

use docsieve_domain::traits::Analyzer as AnalyzerTrait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use english::{AnalyzerConfig, EnglishAnalyzer, DEFAULT_STOPWORDS};

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The analyzer could not process the text for a field
    #[error("Analysis of field '{field}' failed: {reason}")]
    Failed {
        /// Field hint passed to the analyzer
        field: String,
        /// Failure description
        reason: String,
    },

    /// Stopword list could not be used
    #[error("Invalid stopword list: {0}")]
    Stopwords(String),
}

/// Mock analyzer for deterministic testing
///
/// Returns its input unchanged, so tests can inspect exactly what the
/// pipeline would have handed to a real analyzer.
///
/// # Examples
///
/// ```
/// use docsieve_analysis::MockAnalyzer;
/// use docsieve_domain::traits::Analyzer;
///
/// let mut analyzer = MockAnalyzer::new();
/// analyzer.fail_on("full");
///
/// assert!(analyzer.analyze("text", "full").is_err());
/// assert!(analyzer.analyze("text", "clean").is_ok());
/// assert_eq!(analyzer.calls(), vec![("clean".to_string(), "text".to_string())]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    failing_fields: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAnalyzer {
    /// Create a new identity analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure to return an error for a specific field hint
    pub fn fail_on(&mut self, field: impl Into<String>) {
        self.failing_fields.lock().unwrap().insert(field.into());
    }

    /// Successful `(field, text)` calls in the order they were made
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Text last analyzed for the given field hint
    pub fn last_input(&self, field: &str) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(f, _)| f == field)
            .map(|(_, text)| text.clone())
    }

    /// Get the number of successful calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Forget recorded calls
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl AnalyzerTrait for MockAnalyzer {
    type Error = AnalysisError;

    fn analyze(&self, text: &str, field: &str) -> Result<String, Self::Error> {
        if self.failing_fields.lock().unwrap().contains(field) {
            return Err(AnalysisError::Failed {
                field: field.to_string(),
                reason: "Mock error".to_string(),
            });
        }

        self.calls
            .lock()
            .unwrap()
            .push((field.to_string(), text.to_string()));
        Ok(text.to_string())
    }
}
