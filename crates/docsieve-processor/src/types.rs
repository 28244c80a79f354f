//! Result types for noise removal and document processing

use docsieve_domain::FieldSet;

/// Everything the diagnostic filters removed from one document
///
/// Append-only. Each removed span is followed by a single space, in order of
/// removal. A fresh audit is created for every document, so nothing leaks
/// from one document into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseAudit {
    removed: String,
    spans: usize,
}

impl NoiseAudit {
    /// Create an empty audit
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one removed span
    pub fn record(&mut self, span: &str) {
        self.removed.push_str(span);
        self.removed.push(' ');
        self.spans += 1;
    }

    /// Accumulated removed text
    pub fn as_str(&self) -> &str {
        &self.removed
    }

    /// Number of spans recorded
    pub fn span_count(&self) -> usize {
        self.spans
    }

    /// Whether nothing has been removed
    pub fn is_empty(&self) -> bool {
        self.spans == 0
    }
}

/// Filtered text plus the audit of what was removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilterResult {
    /// Text with noise replaced by spaces
    pub filtered: String,

    /// Removed spans
    pub removed: NoiseAudit,
}

/// Fields for one document plus the side data computed along the way
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    /// Fields to hand to the indexing engine
    pub fields: FieldSet,

    /// Tags and URLs removed by the diagnostic filters (empty when the
    /// adapter used only the non-recording pass)
    pub noise: NoiseAudit,

    /// Analyzed `full` text computed but not attached to `fields`
    pub detached_full: Option<String>,
}

impl ProcessedDocument {
    pub(crate) fn new(fields: FieldSet) -> Self {
        Self {
            fields,
            noise: NoiseAudit::new(),
            detached_full: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_appends_with_trailing_space() {
        let mut audit = NoiseAudit::new();
        assert!(audit.is_empty());

        audit.record("<p>");
        audit.record("http://example.com");

        assert_eq!(audit.as_str(), "<p> http://example.com ");
        assert_eq!(audit.span_count(), 2);
        assert!(!audit.is_empty());
    }
}
