//! Core DocumentProcessor implementation

use crate::adapter::FormatAdapter;
use crate::builder::{
    FieldBuilder, FIELD_BOW, FIELD_FULL_BOW, FIELD_ID, FIELD_META, WAPO_AUTHOR, WAPO_CATEGORY,
    WAPO_CONTENT, WAPO_DATE, WAPO_TITLE, WAPO_URL,
};
use crate::config::ProcessorConfig;
use crate::envelope::parse_envelope;
use crate::error::{ProcessorError, Result};
use crate::filters::{filter_web_text, refine_text, strip_noise};
use crate::html::ScraperExtractor;
use crate::types::{NoiseAudit, ProcessedDocument};
use docsieve_domain::traits::{Analyzer, TextExtractor};
use docsieve_domain::{FieldSet, RawDocumentUnit};
use std::fmt::Display;
use tracing::debug;

/// Converts raw documents into field sets
///
/// Holds the analyzer, the structural text parser and the process-wide
/// configuration; all three are read-only, so one processor can serve many
/// threads when its collaborators are `Sync`.
pub struct DocumentProcessor<A, X>
where
    A: Analyzer,
    X: TextExtractor,
{
    analyzer: A,
    extractor: X,
    config: ProcessorConfig,
}

impl<A> DocumentProcessor<A, ScraperExtractor>
where
    A: Analyzer,
    A::Error: Display,
{
    /// Create a processor using the `scraper` text extractor
    pub fn with_scraper(analyzer: A, config: ProcessorConfig) -> Self {
        Self::new(analyzer, ScraperExtractor::new(), config)
    }
}

impl<A, X> DocumentProcessor<A, X>
where
    A: Analyzer,
    X: TextExtractor,
    A::Error: Display,
    X::Error: Display,
{
    /// Create a new DocumentProcessor
    pub fn new(analyzer: A, extractor: X, config: ProcessorConfig) -> Self {
        Self {
            analyzer,
            extractor,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Get the analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Process one document into its field set
    pub fn process(&self, adapter: FormatAdapter, unit: &RawDocumentUnit) -> Result<FieldSet> {
        self.process_detailed(adapter, unit).map(|doc| doc.fields)
    }

    /// Process one document, keeping the noise audit and detached fields
    pub fn process_detailed(
        &self,
        adapter: FormatAdapter,
        unit: &RawDocumentUnit,
    ) -> Result<ProcessedDocument> {
        let processed = match adapter {
            FormatAdapter::PlainFull => self.process_plain(unit),
            FormatAdapter::CleanOnly => self.process_clean(unit),
            FormatAdapter::StructuralParse => self.process_structural(unit),
            FormatAdapter::JsonEnvelope => self.process_json(unit),
        }?;

        debug!(
            "Processed document '{}' with {} adapter: fields {:?}",
            processed.fields.text(FIELD_ID).unwrap_or(unit.label()),
            adapter,
            processed.fields.names()
        );

        Ok(processed)
    }

    /// Full and clean bag-of-words fields
    fn process_plain(&self, unit: &RawDocumentUnit) -> Result<ProcessedDocument> {
        let mut builder = FieldBuilder::new(unit.id(), &self.config)?;
        let raw = unit.raw_text.as_str();

        // Full content keeps tags and URLs, minus punctuation.
        let full = self.analyze(&refine_text(raw), FIELD_FULL_BOW)?;
        builder.content(FIELD_FULL_BOW, full);

        // Clean content is not punctuation-refined.
        let clean = self.analyze(&filter_web_text(raw), FIELD_BOW)?;
        builder.content(FIELD_BOW, clean);

        let noise = if self.config.index_meta {
            let stripped = strip_noise(raw);
            let meta = self.analyze(stripped.removed.as_str(), FIELD_META)?;
            builder.content(FIELD_META, meta);
            stripped.removed
        } else {
            NoiseAudit::new()
        };

        let mut processed = ProcessedDocument::new(builder.build());
        processed.noise = noise;
        Ok(processed)
    }

    /// Single clean field for news text
    fn process_clean(&self, unit: &RawDocumentUnit) -> Result<ProcessedDocument> {
        let mut builder = FieldBuilder::new(unit.id(), &self.config)?;

        let clean_text = refine_text(&filter_web_text(&unit.raw_text));
        let clean = self.analyze(&clean_text, FIELD_BOW)?;
        builder.content(FIELD_BOW, clean);

        Ok(ProcessedDocument::new(builder.build()))
    }

    /// Clean field from DOM-extracted text
    fn process_structural(&self, unit: &RawDocumentUnit) -> Result<ProcessedDocument> {
        let mut builder = FieldBuilder::new(unit.id(), &self.config)?;
        let raw = unit.raw_text.as_str();

        let full = self.analyze(&refine_text(raw), FIELD_FULL_BOW)?;
        let detached_full = if self.config.attach_structural_full {
            builder.content(FIELD_FULL_BOW, full);
            None
        } else {
            debug!(
                "Document '{}': full content analyzed ({} chars) but not indexed",
                unit.label(),
                full.len()
            );
            Some(full)
        };

        let visible = self.extract(raw)?;
        let clean = self.analyze(&visible, FIELD_BOW)?;
        builder.content(FIELD_BOW, clean);

        let mut processed = ProcessedDocument::new(builder.build());
        processed.detached_full = detached_full;
        Ok(processed)
    }

    /// Metadata and content fields from a news-article envelope
    fn process_json(&self, unit: &RawDocumentUnit) -> Result<ProcessedDocument> {
        let envelope = parse_envelope(&unit.raw_text)?;
        let mut builder = FieldBuilder::new(Some(&envelope.id), &self.config)?;

        let visible = self.extract(&envelope.raw_content())?;
        let content_text = refine_text(&filter_web_text(&visible));
        let content = self.analyze(&content_text, WAPO_CONTENT)?;

        builder
            .keyword(WAPO_URL, envelope.url.as_str())
            .keyword(WAPO_TITLE, envelope.title.as_str())
            .keyword(WAPO_AUTHOR, envelope.author.as_str())
            .long(WAPO_DATE, envelope.published_date)
            .keyword(WAPO_CATEGORY, envelope.category())
            .content(WAPO_CONTENT, content);

        Ok(ProcessedDocument::new(builder.build()))
    }

    fn analyze(&self, text: &str, field: &str) -> Result<String> {
        self.analyzer
            .analyze(text, field)
            .map_err(|e| ProcessorError::Analyzer(e.to_string()))
    }

    fn extract(&self, markup: &str) -> Result<String> {
        self.extractor
            .extract_visible_text(markup)
            .map_err(|e| ProcessorError::Parser(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsieve_analysis::MockAnalyzer;

    fn processor(config: ProcessorConfig) -> DocumentProcessor<MockAnalyzer, ScraperExtractor> {
        DocumentProcessor::with_scraper(MockAnalyzer::new(), config)
    }

    #[test]
    fn test_plain_full_field_order_and_inputs() {
        let p = processor(ProcessorConfig::default());
        let unit = RawDocumentUnit::new("d1", "A <b>bold</b> claim, see www.x.com!");

        let fields = p.process(FormatAdapter::PlainFull, &unit).unwrap();
        assert_eq!(fields.names(), vec![FIELD_ID, FIELD_FULL_BOW, FIELD_BOW]);

        assert_eq!(fields.text(FIELD_FULL_BOW), Some("A b bold b claim see www x com"));
        assert_eq!(fields.text(FIELD_BOW), Some("A  bold  claim, see  !"));
    }

    #[test]
    fn test_plain_meta_field() {
        let config = ProcessorConfig {
            index_meta: true,
            ..ProcessorConfig::default()
        };
        let p = processor(config);
        let unit = RawDocumentUnit::new("d1", "<p>text</p> http://a.b");

        let doc = p.process_detailed(FormatAdapter::PlainFull, &unit).unwrap();
        assert_eq!(doc.fields.names(), vec![FIELD_ID, FIELD_FULL_BOW, FIELD_BOW, FIELD_META]);
        assert_eq!(doc.fields.text(FIELD_META), Some("<p> </p> http://a.b "));
        assert_eq!(doc.noise.span_count(), 3);
    }

    #[test]
    fn test_plain_without_meta_has_empty_audit() {
        let p = processor(ProcessorConfig::default());
        let unit = RawDocumentUnit::new("d1", "<p>text</p>");
        let doc = p.process_detailed(FormatAdapter::PlainFull, &unit).unwrap();
        assert!(doc.noise.is_empty());
        assert!(doc.fields.get(FIELD_META).is_none());
    }

    #[test]
    fn test_clean_only_refines_after_filtering() {
        let p = processor(ProcessorConfig::default());
        let unit = RawDocumentUnit::new("n1", "Breaking: <a href=\"http://x.org\">story</a>, more at https://x.org/s.");

        let fields = p.process(FormatAdapter::CleanOnly, &unit).unwrap();
        assert_eq!(fields.names(), vec![FIELD_ID, FIELD_BOW]);
        assert_eq!(fields.text(FIELD_BOW), Some("Breaking story more at"));
    }

    #[test]
    fn test_structural_detaches_full_by_default() {
        let p = processor(ProcessorConfig::default());
        let unit = RawDocumentUnit::new("s1", "<div>Hello <script>x()</script><p>world</p></div>");

        let doc = p.process_detailed(FormatAdapter::StructuralParse, &unit).unwrap();
        assert_eq!(doc.fields.names(), vec![FIELD_ID, FIELD_BOW]);
        assert_eq!(doc.fields.text(FIELD_BOW), Some("Hello world"));
        assert_eq!(doc.detached_full.as_deref(), Some("div Hello script x script p world p div"));

        // The full text still went through the analyzer.
        assert!(p.analyzer().last_input(FIELD_FULL_BOW).is_some());
    }

    #[test]
    fn test_structural_attaches_full_when_configured() {
        let config = ProcessorConfig {
            attach_structural_full: true,
            ..ProcessorConfig::default()
        };
        let p = processor(config);
        let unit = RawDocumentUnit::new("s1", "<p>Hi</p>");

        let doc = p.process_detailed(FormatAdapter::StructuralParse, &unit).unwrap();
        assert_eq!(doc.fields.names(), vec![FIELD_ID, FIELD_FULL_BOW, FIELD_BOW]);
        assert!(doc.detached_full.is_none());
    }

    #[test]
    fn test_missing_identifier() {
        let p = processor(ProcessorConfig::default());
        let unit = RawDocumentUnit::json_line("text without id");
        for adapter in [
            FormatAdapter::PlainFull,
            FormatAdapter::CleanOnly,
            FormatAdapter::StructuralParse,
        ] {
            let err = p.process(adapter, &unit).unwrap_err();
            assert!(err.is_malformed_input());
        }
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        let mut analyzer = MockAnalyzer::new();
        analyzer.fail_on(FIELD_BOW);
        let p = DocumentProcessor::with_scraper(analyzer, ProcessorConfig::default());

        let err = p
            .process(FormatAdapter::CleanOnly, &RawDocumentUnit::new("d", "x"))
            .unwrap_err();
        assert!(matches!(err, ProcessorError::Analyzer(ref msg) if msg.contains("clean")));
    }
}
