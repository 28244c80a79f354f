//! Batch runner feeding processed documents into a sink.

use crate::error::{CliError, Result};
use crate::output::JsonLinesSink;
use crate::reader::{JsonLinesReader, TrecReader};
use docsieve_domain::traits::{Analyzer, IndexSink, TextExtractor};
use docsieve_domain::RawDocumentUnit;
use docsieve_processor::{DocumentProcessor, FormatAdapter};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Documents handed to the sink
    pub processed: usize,
    /// Documents rejected by the processor
    pub skipped: usize,
}

/// Process every unit and add the results to `sink`.
///
/// A document the processor rejects is logged and skipped. Reader and sink
/// errors abort the batch.
pub fn run_batch<A, X, I, S>(
    processor: &DocumentProcessor<A, X>,
    adapter: FormatAdapter,
    units: I,
    sink: &mut S,
) -> Result<BatchStats>
where
    A: Analyzer,
    X: TextExtractor,
    A::Error: Display,
    X::Error: Display,
    I: IntoIterator<Item = Result<RawDocumentUnit>>,
    S: IndexSink<Error = CliError>,
{
    let mut stats = BatchStats::default();

    for (index, unit) in units.into_iter().enumerate() {
        let unit = unit?;
        match processor.process(adapter, &unit) {
            Ok(fields) => {
                sink.add_document(&fields)?;
                stats.processed += 1;
                debug!("Indexed document #{} with {} fields", index + 1, fields.len());
            }
            Err(e) => {
                warn!("Skipping document #{} ({}): {}", index + 1, unit.label(), e);
                stats.skipped += 1;
            }
        }
    }

    sink.commit()?;
    info!(
        "Batch complete: {} processed, {} skipped",
        stats.processed, stats.skipped
    );
    Ok(stats)
}

/// Read a corpus in the adapter's input format and write JSON-lines output.
pub fn run_corpus<A, X, R, W>(
    processor: &DocumentProcessor<A, X>,
    adapter: FormatAdapter,
    input: R,
    output: W,
) -> Result<BatchStats>
where
    A: Analyzer,
    X: TextExtractor,
    A::Error: Display,
    X::Error: Display,
    R: BufRead,
    W: Write,
{
    let mut sink = JsonLinesSink::new(output);
    if adapter.reads_json_lines() {
        run_batch(processor, adapter, JsonLinesReader::new(input), &mut sink)
    } else {
        run_batch(processor, adapter, TrecReader::new(input), &mut sink)
    }
}
