//! docsieve Processor
//!
//! Turns raw corpus documents into flat, typed field sets for a text index.
//!
//! # Overview
//!
//! Each input document passes through pattern-based noise filters (tag and
//! URL stripping, punctuation refinement) or a DOM text extractor, then
//! through an external analyzer, and is finally packaged by the field
//! builder. Which steps run, and which fields come out, depends on the
//! selected [`FormatAdapter`].
//!
//! # Architecture
//!
//! ```text
//! Reader → RawDocumentUnit → FormatAdapter → Noise Filters / TextExtractor
//!        → Analyzer → FieldBuilder → FieldSet → IndexSink
//! ```
//!
//! # Adapters
//!
//! - **PlainFull**: `full` (punctuation refined) and `clean` (tags/URLs removed)
//! - **CleanOnly**: `clean` with tags, URLs and punctuation removed
//! - **StructuralParse**: `clean` from DOM-extracted visible text
//! - **JsonEnvelope**: news-article metadata fields plus `content`
//!
//! # Example Usage
//!
//! ```
//! use docsieve_processor::{DocumentProcessor, FormatAdapter, ProcessorConfig};
//! use docsieve_analysis::MockAnalyzer;
//! use docsieve_domain::RawDocumentUnit;
//!
//! let processor = DocumentProcessor::with_scraper(MockAnalyzer::new(), ProcessorConfig::default());
//!
//! let unit = RawDocumentUnit::new("FT911-3", "See <b>www.ft.com</b> for more.");
//! let fields = processor.process(FormatAdapter::CleanOnly, &unit)?;
//!
//! assert_eq!(fields.names(), vec!["id", "clean"]);
//! assert_eq!(fields.text("clean"), Some("See for more"));
//! # Ok::<(), docsieve_processor::ProcessorError>(())
//! ```

#![warn(missing_docs)]

mod adapter;
mod builder;
mod config;
pub mod envelope;
mod error;
pub mod filters;
pub mod html;
mod processor;
mod types;


pub use adapter::FormatAdapter;
pub use builder::{
    build_fields, FieldBuilder, FIELD_BOW, FIELD_FULL_BOW, FIELD_ID, FIELD_META, WAPO_AUTHOR,
    WAPO_CATEGORY, WAPO_CONTENT, WAPO_DATE, WAPO_TITLE, WAPO_URL,
};
pub use config::ProcessorConfig;
pub use envelope::{parse_envelope, ContentBlock, WapoEnvelope};
pub use error::{ProcessorError, Result};
pub use html::ScraperExtractor;
pub use processor::DocumentProcessor;
pub use types::{NoiseAudit, NoiseFilterResult, ProcessedDocument};
