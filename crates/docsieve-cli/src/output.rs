//! JSON-lines index sink.

use crate::error::CliError;
use docsieve_domain::traits::IndexSink;
use docsieve_domain::{FieldSet, FieldValue};
use serde_json::{json, Value};
use std::io::Write;

/// Writes each field set as one JSON object per line.
///
/// ```json
/// {"fields":[{"name":"id","value":"d1","stored":true,"analyzed":false,"term_vector":"NONE"}]}
/// ```
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink over a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of documents written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn document_json(fields: &FieldSet) -> Value {
    let fields: Vec<Value> = fields
        .iter()
        .map(|field| {
            let value = match &field.value {
                FieldValue::Text(text) => json!(text),
                FieldValue::Long(n) => json!(n),
            };
            json!({
                "name": field.name,
                "value": value,
                "stored": field.stored,
                "analyzed": field.analyzed,
                "term_vector": field.term_vector.as_str(),
            })
        })
        .collect();

    json!({ "fields": fields })
}

impl<W: Write> IndexSink for JsonLinesSink<W> {
    type Error = CliError;

    fn add_document(&mut self, fields: &FieldSet) -> Result<(), Self::Error> {
        serde_json::to_writer(&mut self.writer, &document_json(fields))?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()?;
        Ok(())
    }
}
