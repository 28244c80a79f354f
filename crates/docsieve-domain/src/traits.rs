//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the noise-removal pipeline and
//! the components it consumes or feeds. Implementations live in other crates.

use crate::field::FieldSet;

/// Trait for turning raw text into an analyzed token stream
///
/// Implemented by the analysis layer (docsieve-analysis). Implementations are
/// expected to be deterministic and free of side effects.
pub trait Analyzer {
    /// Error type for analysis
    type Error;

    /// Analyze `text` for the field named `field` and return the token
    /// stream in its text form
    fn analyze(&self, text: &str, field: &str) -> Result<String, Self::Error>;
}

/// Trait for parsing markup and returning only its human-visible text
///
/// Implemented by the processor layer (docsieve-processor). Must tolerate
/// malformed markup.
pub trait TextExtractor {
    /// Error type for extraction
    type Error;

    /// Extract the visible text of `markup`, without tags or scripts
    fn extract_visible_text(&self, markup: &str) -> Result<String, Self::Error>;
}

/// Trait for the indexing engine that receives field sets
///
/// Implemented by output layers (docsieve-cli).
pub trait IndexSink {
    /// Error type for sink operations
    type Error;

    /// Accept one document's fields
    fn add_document(&mut self, fields: &FieldSet) -> Result<(), Self::Error>;

    /// Flush anything buffered
    fn commit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    type Error = A::Error;

    fn analyze(&self, text: &str, field: &str) -> Result<String, Self::Error> {
        (**self).analyze(text, field)
    }
}

impl<X: TextExtractor + ?Sized> TextExtractor for &X {
    type Error = X::Error;

    fn extract_visible_text(&self, markup: &str) -> Result<String, Self::Error> {
        (**self).extract_visible_text(markup)
    }
}

/// Collects field sets in memory
impl IndexSink for Vec<FieldSet> {
    type Error = std::convert::Infallible;

    fn add_document(&mut self, fields: &FieldSet) -> Result<(), Self::Error> {
        self.push(fields.clone());
        Ok(())
    }
}
