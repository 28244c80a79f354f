//! Corpus readers producing raw document units.

use crate::error::{CliError, Result};
use docsieve_domain::RawDocumentUnit;
use std::io::{self, BufRead};

const DOC_OPEN: &str = "<DOC>";
const DOC_CLOSE: &str = "</DOC>";
const DOCNO_OPEN: &str = "<DOCNO>";
const DOCNO_CLOSE: &str = "</DOCNO>";

/// Read one line, decoding invalid UTF-8 with replacement characters.
///
/// The trailing `\n` or `\r\n` is removed.
fn read_line_lossy<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> Option<io::Result<String>> {
    buf.clear();
    match input.read_until(b'\n', buf) {
        Ok(0) => None,
        Ok(_) => {
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            Some(Ok(String::from_utf8_lossy(buf).into_owned()))
        }
        Err(e) => Some(Err(e)),
    }
}

/// Reads TREC-style `<DOC>` blocks.
///
/// The identifier comes from the `<DOCNO>` line; every other line inside
/// the block is kept, joined with `\n`, as the raw text. Bytes that are not
/// valid UTF-8 become U+FFFD.
pub struct TrecReader<R> {
    input: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> TrecReader<R> {
    /// Create a reader over tagged text.
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Option<Result<String>> {
        let line = read_line_lossy(&mut self.input, &mut self.buf)?;
        self.line_no += 1;
        Some(line.map_err(CliError::from))
    }

    fn read_document(&mut self, start: usize) -> Result<RawDocumentUnit> {
        let mut id = None;
        let mut body: Vec<String> = Vec::new();

        while let Some(line) = self.next_line() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed == DOC_CLOSE {
                return Ok(RawDocumentUnit {
                    id,
                    raw_text: body.join("\n"),
                });
            }

            match docno(trimmed) {
                Some(value) if id.is_none() => id = Some(value.to_string()),
                _ => body.push(line),
            }
        }

        Err(CliError::InvalidInput(format!(
            "Document starting at line {} is missing {}",
            start, DOC_CLOSE
        )))
    }
}

fn docno(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(DOCNO_OPEN)?;
    let value = rest.strip_suffix(DOCNO_CLOSE).unwrap_or(rest);
    Some(value.trim())
}

impl<R: BufRead> Iterator for TrecReader<R> {
    type Item = Result<RawDocumentUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.next_line()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            if line.trim() == DOC_OPEN {
                let start = self.line_no;
                return Some(self.read_document(start));
            }
        }
    }
}

/// Reads one JSON envelope per non-blank line.
///
/// Bytes that are not valid UTF-8 become U+FFFD.
pub struct JsonLinesReader<R> {
    input: R,
    buf: Vec<u8>,
}

impl<R: BufRead> JsonLinesReader<R> {
    /// Create a reader over JSON-lines text.
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for JsonLinesReader<R> {
    type Item = Result<RawDocumentUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match read_line_lossy(&mut self.input, &mut self.buf)? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok(RawDocumentUnit::json_line(line))),
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
