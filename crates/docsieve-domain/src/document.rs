//! Raw document units as produced by input readers

/// One unparsed document as read from an input source
///
/// Tagged-text corpora supply the identifier alongside the text. For JSON
/// envelopes the identifier lives inside the payload, so the unit carries
/// the raw line only and `id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocumentUnit {
    /// Document identifier, if known before parsing
    pub id: Option<String>,

    /// The document text exactly as read
    pub raw_text: String,
}

impl RawDocumentUnit {
    /// Create a unit with a pre-supplied identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use docsieve_domain::RawDocumentUnit;
    ///
    /// let unit = RawDocumentUnit::new("FT911-1", "<TEXT>Some text</TEXT>");
    /// assert_eq!(unit.id(), Some("FT911-1"));
    /// ```
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            raw_text: raw_text.into(),
        }
    }

    /// Create a unit from a single JSON line whose identifier is in the payload
    pub fn json_line(line: impl Into<String>) -> Self {
        Self {
            id: None,
            raw_text: line.into(),
        }
    }

    /// Borrow the identifier
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Label used in diagnostics when the identifier is unknown
    pub fn label(&self) -> &str {
        self.id().unwrap_or("<unidentified>")
    }
}
