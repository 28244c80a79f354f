//! Structural text extraction backed by an HTML5 parser
//!
//! Parses the input as a document tree (tolerating malformed or deeply
//! nested markup) and keeps only human-visible text.

use docsieve_domain::traits::TextExtractor;
use scraper::{ElementRef, Html, Node};
use std::convert::Infallible;

/// Elements whose text is never visible
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that separate words when rendered
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

fn is_block(name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&name)
}

enum Step<'a> {
    Open(ElementRef<'a>),
    Close,
    Text(&'a str),
}

/// [`TextExtractor`] using the `scraper` HTML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperExtractor;

impl ScraperExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for ScraperExtractor {
    type Error = Infallible;

    fn extract_visible_text(&self, markup: &str) -> Result<String, Self::Error> {
        Ok(visible_text(markup))
    }
}

/// Visible text of `markup`, whitespace-normalized
///
/// # Examples
///
/// ```
/// use docsieve_processor::html::visible_text;
///
/// let text = visible_text("<p>Fish &amp; <b>Chips</b></p><script>track()</script>");
/// assert_eq!(text, "Fish & Chips");
/// ```
pub fn visible_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let mut out = String::with_capacity(markup.len());
    let mut stack = vec![Step::Open(document.root_element())];

    // Iterative walk; nesting depth is unbounded in the input
    while let Some(step) = stack.pop() {
        match step {
            Step::Text(text) => out.push_str(text),
            Step::Close => out.push(' '),
            Step::Open(element) => {
                let name = element.value().name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                if is_block(name) {
                    out.push(' ');
                    stack.push(Step::Close);
                }

                let children: Vec<_> = element.children().collect();
                for child in children.into_iter().rev() {
                    match child.value() {
                        Node::Text(text) => stack.push(Step::Text(&**text)),
                        Node::Element(_) => {
                            if let Some(child) = ElementRef::wrap(child) {
                                stack.push(Step::Open(child));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let html = "<html><head><title>T</title><style>p { color: red }</style></head>\
                    <body><p>Hello <b>world</b></p><script>var x = 1;</script>\
                    <div>Bye</div></body></html>";
        assert_eq!(visible_text(html), "T Hello world Bye");
    }

    #[test]
    fn test_malformed_markup() {
        assert_eq!(visible_text("<p>Unclosed <b>bold <i>text"), "Unclosed bold text");
        assert_eq!(visible_text("<div><span>a</div></span>b"), "a b");
    }

    #[test]
    fn test_block_boundaries_split_words() {
        assert_eq!(visible_text("<p>one</p>two<br>three"), "one two three");
        assert_eq!(visible_text("<li>a</li><li>b</li>"), "a b");
    }

    #[test]
    fn test_block_then_inline_splits_words() {
        assert_eq!(visible_text("<p>one</p><b>two</b>"), "one two");
        assert_eq!(visible_text("<div>alpha</div><a href='x'>beta</a> gamma"), "alpha beta gamma");
        assert_eq!(visible_text("<h2>Title</h2><em>Lead</em> text"), "Title Lead text");
    }

    #[test]
    fn test_deep_nesting() {
        let markup = format!("{}deep{}", "<div>".repeat(2_000), "</div>".repeat(2_000));
        assert_eq!(visible_text(&markup), "deep");
    }

    #[test]
    fn test_inline_elements_do_not_split_words() {
        assert_eq!(visible_text("un<b>break</b>able"), "unbreakable");
    }

    #[test]
    fn test_plain_text_and_empty_input() {
        assert_eq!(visible_text("just   text\nhere"), "just text here");
        assert_eq!(visible_text(""), "");
    }

    #[test]
    fn test_extractor_trait() {
        let extractor = ScraperExtractor::new();
        let text = extractor.extract_visible_text("<h1>Title</h1><p>Body</p>").unwrap();
        assert_eq!(text, "Title Body");
    }
}
