//! Parse news-article JSON envelopes

use crate::error::{ProcessorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Content block types that contribute to the indexed content
pub const WAPO_CONTENT_TYPES: &[&str] = &["kicker", "sanitized_html", "title"];

/// Block type whose content is the article category
pub const KICKER: &str = "kicker";

/// One block of an article's `contents` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block type (`kicker`, `sanitized_html`, `title`, `image`, ...)
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Block content; image and embed blocks carry none
    pub content: Option<String>,
}

impl ContentBlock {
    /// Whether this block contributes to the indexed content
    pub fn is_indexed(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|kind| WAPO_CONTENT_TYPES.contains(&kind))
    }
}

/// A parsed news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WapoEnvelope {
    /// Article identifier
    pub id: String,

    /// Article URL (`article_url` on the wire)
    pub url: String,

    /// Headline
    pub title: String,

    /// Byline
    pub author: String,

    /// Publication time as an epoch integer
    pub published_date: i64,

    /// Content blocks in document order
    pub contents: Vec<ContentBlock>,
}

impl WapoEnvelope {
    /// Content of the first kicker block, or empty
    pub fn category(&self) -> &str {
        self.contents
            .iter()
            .find(|b| b.kind.as_deref() == Some(KICKER))
            .and_then(|b| b.content.as_deref())
            .unwrap_or("")
    }

    /// Blocks that contribute to the indexed content, in order
    pub fn indexed_blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.contents.iter().filter(|b| b.is_indexed())
    }

    /// Indexed block contents, each followed by a newline
    pub fn raw_content(&self) -> String {
        let mut raw = String::new();
        for block in self.indexed_blocks() {
            raw.push_str(block.content.as_deref().unwrap_or(""));
            raw.push('\n');
        }
        raw
    }
}

/// Parse one JSON line into an envelope
///
/// `id`, `article_url`, `title`, `author` and `published_date` are
/// mandatory. A missing `contents` array means no blocks. Indexed blocks
/// must carry content; other blocks are kept as-is.
pub fn parse_envelope(line: &str) -> Result<WapoEnvelope> {
    let json: Value = serde_json::from_str(line.trim())?;

    let obj = json
        .as_object()
        .ok_or_else(|| ProcessorError::MalformedInput("Expected JSON object".to_string()))?;

    let id = required_str(obj, "id")?;
    let url = required_str(obj, "article_url")?;
    let title = required_str(obj, "title")?;
    let author = required_str(obj, "author")?;

    let published_date = obj
        .get("published_date")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| missing(&id, "published_date"))?;

    let contents = match obj.get("contents") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .enumerate()
            .map(|(idx, block)| parse_block(&id, idx, block))
            .collect::<Result<Vec<_>>>()?,
        Some(_) => {
            return Err(ProcessorError::MalformedInput(format!(
                "Document '{}': 'contents' is not an array",
                id
            )))
        }
    };

    debug!("Parsed envelope '{}' with {} content blocks", id, contents.len());

    Ok(WapoEnvelope {
        id,
        url,
        title,
        author,
        published_date,
        contents,
    })
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            let id = obj.get("id").and_then(|v| v.as_str()).unwrap_or("?");
            missing(id, key)
        })
}

fn missing(id: &str, key: &str) -> ProcessorError {
    ProcessorError::MalformedInput(format!("Document '{}': missing or invalid '{}'", id, key))
}

/// Parse a single content block
fn parse_block(id: &str, idx: usize, json: &Value) -> Result<ContentBlock> {
    let kind = json.get("type").and_then(|v| v.as_str()).map(str::to_string);

    let content = match json.get("content") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    let block = ContentBlock { kind, content };
    if block.is_indexed() && block.content.is_none() {
        return Err(ProcessorError::MalformedInput(format!(
            "Document '{}': content block {} has no content",
            id, idx
        )));
    }
    Ok(block)
}
