//! Field builder - typed records for the indexing engine
//!
//! The builder performs no text transformation. It only decides, per field
//! kind, the stored flag and the term-vector mode.

use crate::config::ProcessorConfig;
use crate::error::{ProcessorError, Result};
use docsieve_domain::{FieldSet, FieldSpec, FieldValue, TermVectorMode};

/// Document identifier
pub const FIELD_ID: &str = "id";
/// Full analyzed content, markup and URLs included
pub const FIELD_FULL_BOW: &str = "full";
/// Clean analyzed content, markup and URLs removed
pub const FIELD_BOW: &str = "clean";
/// Analyzed text of the removed tags and URLs
pub const FIELD_META: &str = "meta";

/// News article URL
pub const WAPO_URL: &str = "url";
/// News article title
pub const WAPO_TITLE: &str = "title";
/// News article author
pub const WAPO_AUTHOR: &str = "author";
/// News article publication time, epoch integer
pub const WAPO_DATE: &str = "publishedDate";
/// News article category (kicker)
pub const WAPO_CATEGORY: &str = "category";
/// News article analyzed content
pub const WAPO_CONTENT: &str = "content";

/// Builds the field set for one document
///
/// The identifier field is always first.
///
/// # Examples
///
/// ```
/// use docsieve_processor::{FieldBuilder, ProcessorConfig};
///
/// let config = ProcessorConfig::default();
/// let mut builder = FieldBuilder::new(Some("d1"), &config).unwrap();
/// builder.content("clean", "token stream");
/// let fields = builder.build();
///
/// assert_eq!(fields.names(), vec!["id", "clean"]);
/// assert!(fields.get("id").unwrap().stored);
/// assert!(!fields.get("clean").unwrap().stored);
/// ```
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    config: &'a ProcessorConfig,
    fields: FieldSet,
}

impl<'a> FieldBuilder<'a> {
    /// Start a field set, rejecting an absent or blank identifier
    pub fn new(id: Option<&str>, config: &'a ProcessorConfig) -> Result<Self> {
        let id = id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ProcessorError::MissingIdentifier)?;

        let mut fields = FieldSet::new();
        fields.push(FieldSpec {
            name: FIELD_ID.to_string(),
            value: FieldValue::Text(id.to_string()),
            stored: true,
            analyzed: false,
            term_vector: TermVectorMode::None,
        });

        Ok(Self { config, fields })
    }

    /// Add an analyzed content field under the configured policy
    pub fn content(&mut self, name: &str, analyzed: impl Into<String>) -> &mut Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            value: FieldValue::Text(analyzed.into()),
            stored: self.config.store_policy.is_stored(),
            analyzed: true,
            term_vector: self.config.term_vector,
        });
        self
    }

    /// Add a stored, verbatim text field
    pub fn keyword(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            value: FieldValue::Text(value.into()),
            stored: true,
            analyzed: false,
            term_vector: TermVectorMode::None,
        });
        self
    }

    /// Add a stored integer field
    pub fn long(&mut self, name: &str, value: i64) -> &mut Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            value: FieldValue::Long(value),
            stored: true,
            analyzed: false,
            term_vector: TermVectorMode::None,
        });
        self
    }

    /// Finish the field set
    pub fn build(self) -> FieldSet {
        self.fields
    }
}

/// Build an identifier plus one content field per `(name, analyzed text)` pair
pub fn build_fields<'p, I>(id: Option<&str>, pairs: I, config: &ProcessorConfig) -> Result<FieldSet>
where
    I: IntoIterator<Item = (&'p str, String)>,
{
    let mut builder = FieldBuilder::new(id, config)?;
    for (name, text) in pairs {
        builder.content(name, text);
    }
    Ok(builder.build())
}
