//! Field module - typed, named units handed to the indexing engine

use crate::policy::TermVectorMode;
use std::fmt;

/// Value carried by a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Textual value (identifiers, keywords, analyzed token streams)
    Text(String),

    /// 64-bit integer value (epoch timestamps)
    Long(i64),
}

impl FieldValue {
    /// Get the text value, if this is a text field
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Long(_) => None,
        }
    }

    /// Get the integer value, if this is a numeric field
    pub fn as_long(&self) -> Option<i64> {
        match self {
            FieldValue::Long(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Long(v) => write!(f, "{}", v),
        }
    }
}

/// A single named unit to be indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name; not required to be unique within a document
    pub name: String,

    /// Field value
    pub value: FieldValue,

    /// Whether the literal value is stored
    pub stored: bool,

    /// Whether the value is an analyzed token stream (bag of words)
    pub analyzed: bool,

    /// Term-vector retention
    pub term_vector: TermVectorMode,
}

/// Ordered fields for one document
///
/// Insertion order is kept so output is reproducible. Duplicate names are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldSpec>,
}

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// First field with the given name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All fields with the given name, in insertion order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldSpec> + 'a {
        self.fields.iter().filter(move |f| f.name == name)
    }

    /// Text value of the first field with the given name
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|f| f.value.as_text())
    }

    /// Integer value of the first field with the given name
    pub fn long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|f| f.value.as_long())
    }

    /// Field names in order
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Iterate over the fields
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for FieldSet {
    type Item = FieldSpec;
    type IntoIter = std::vec::IntoIter<FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
