//! Supported input shapes

use std::fmt;

/// Per-format processing rules
///
/// Selected by the caller for each document (normally once per corpus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatAdapter {
    /// Tagged text: analyzed `full` (punctuation refined) and `clean`
    /// (tags and URLs removed) fields
    PlainFull,

    /// Tagged news text: a single `clean` field, web noise and punctuation removed
    CleanOnly,

    /// Tagged text whose markup is removed by a DOM parser
    StructuralParse,

    /// One news-article JSON envelope per line
    JsonEnvelope,
}

impl FormatAdapter {
    /// All adapters
    pub const ALL: [FormatAdapter; 4] = [
        FormatAdapter::PlainFull,
        FormatAdapter::CleanOnly,
        FormatAdapter::StructuralParse,
        FormatAdapter::JsonEnvelope,
    ];

    /// Get the adapter name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatAdapter::PlainFull => "plain",
            FormatAdapter::CleanOnly => "clean",
            FormatAdapter::StructuralParse => "structural",
            FormatAdapter::JsonEnvelope => "json",
        }
    }

    /// Parse an adapter name, accepting corpus-style aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "trec" | "full" => Some(FormatAdapter::PlainFull),
            "clean" | "news" => Some(FormatAdapter::CleanOnly),
            "structural" | "jsoup" | "dom" => Some(FormatAdapter::StructuralParse),
            "json" | "wapo" => Some(FormatAdapter::JsonEnvelope),
            _ => None,
        }
    }

    /// Whether input units are JSON lines rather than tagged documents
    pub fn reads_json_lines(&self) -> bool {
        matches!(self, FormatAdapter::JsonEnvelope)
    }
}

impl fmt::Display for FormatAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FormatAdapter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid format adapter: {}", s))
    }
}
