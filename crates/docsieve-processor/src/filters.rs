//! Noise filters - pattern-based removal of markup, URLs and punctuation
//!
//! All filters are pure: they borrow their input and return a new string.
//! The diagnostic variants (`strip_tags`, `strip_urls`) additionally append
//! every removed span to a caller-owned [`NoiseAudit`].
//!
//! Tag and URL removal must run before [`refine_special_chars`], which would
//! otherwise destroy the `<`, `>` and `://` delimiters the patterns rely on.
//! Sequencing is up to the adapters.

use crate::types::{NoiseAudit, NoiseFilterResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// An open angle bracket up to the next `>` or end of line
///
/// An unterminated tag is closed by the newline rather than left in place.
pub const TAG_PATTERN: &str = r"<[^>\n]*[>\n]";

/// `http://`, `https://`, `ftp://`, `file://` or `www` at a word boundary,
/// followed by URL characters and ending on one that cannot be trailing
/// punctuation
pub const URL_PATTERN: &str =
    r"\b((https?|ftp|file)://|www)[-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[-a-zA-Z0-9+&@#/%=~_|]";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TAG_PATTERN).expect("valid regex"));

pub(crate) static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(URL_PATTERN).expect("valid regex"));

static WEB_NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}|{}", TAG_PATTERN, URL_PATTERN)).expect("valid regex")
});

static PUNCT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]]+").expect("valid regex"));

fn strip_recorded(re: &Regex, text: &str, audit: &mut NoiseAudit) -> String {
    for m in re.find_iter(text) {
        audit.record(m.as_str());
    }
    re.replace_all(text, " ").into_owned()
}

/// Replace every tag with a single space, recording each one
///
/// # Examples
///
/// ```
/// use docsieve_processor::{filters, NoiseAudit};
///
/// let mut audit = NoiseAudit::new();
/// let text = filters::strip_tags("<p>Hello</p>", &mut audit);
/// assert_eq!(text, " Hello ");
/// assert_eq!(audit.as_str(), "<p> </p> ");
/// ```
pub fn strip_tags(text: &str, audit: &mut NoiseAudit) -> String {
    strip_recorded(&TAG_RE, text, audit)
}

/// Replace every URL with a single space, recording each one
///
/// Punctuation directly after a URL stays in the text.
pub fn strip_urls(text: &str, audit: &mut NoiseAudit) -> String {
    strip_recorded(&URL_RE, text, audit)
}

/// Strip tags, then URLs, into a fresh audit
pub fn strip_noise(text: &str) -> NoiseFilterResult {
    let mut removed = NoiseAudit::new();
    let without_tags = strip_tags(text, &mut removed);
    let filtered = strip_urls(&without_tags, &mut removed);
    NoiseFilterResult { filtered, removed }
}

/// Replace tags and URLs with a single space in one pass, recording nothing
pub fn filter_web_text(text: &str) -> String {
    WEB_NOISE_RE.replace_all(text, " ").into_owned()
}

/// Replace each run of ASCII punctuation with a space and normalize spacing
///
/// Absent input stays absent.
///
/// # Examples
///
/// ```
/// use docsieve_processor::filters::refine_special_chars;
///
/// assert_eq!(refine_special_chars(Some("a, b!  c.")).as_deref(), Some("a b c"));
/// assert_eq!(refine_special_chars(None), None);
/// ```
pub fn refine_special_chars(text: Option<&str>) -> Option<String> {
    text.map(refine_text)
}

/// [`refine_special_chars`] for text that is known to be present
pub fn refine_text(text: &str) -> String {
    let spaced = PUNCT_RUN_RE.replace_all(text, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_tags_replaces_each_tag_with_space() {
        let mut audit = NoiseAudit::new();
        let result = strip_tags("a<b>c</b>d", &mut audit);
        assert_eq!(result, "a c d");
        assert_eq!(audit.as_str(), "<b> </b> ");
        assert_eq!(audit.span_count(), 2);
    }

    #[test]
    fn test_unterminated_tag_closed_by_newline() {
        let mut audit = NoiseAudit::new();
        let result = strip_tags("keep <a href=\"x\"\nnext line", &mut audit);
        assert_eq!(result, "keep  next line");
        assert_eq!(audit.as_str(), "<a href=\"x\"\n ");
    }

    #[test]
    fn test_unterminated_tag_at_end_of_text_is_kept() {
        let mut audit = NoiseAudit::new();
        let result = strip_tags("a < b", &mut audit);
        assert_eq!(result, "a < b");
        assert!(audit.is_empty());
    }

    #[test]
    fn test_strip_urls_keeps_trailing_punctuation() {
        let mut audit = NoiseAudit::new();
        let result = strip_urls("See http://example.com/a?b=1, then stop.", &mut audit);
        assert_eq!(result, "See  , then stop.");
        assert_eq!(audit.as_str(), "http://example.com/a?b=1 ");
    }

    #[test]
    fn test_strip_urls_all_schemes() {
        let mut audit = NoiseAudit::new();
        let result = strip_urls(
            "https://a.org ftp://b.net file:///tmp/x www.c.com",
            &mut audit,
        );
        assert_eq!(result.trim(), "");
        assert_eq!(audit.span_count(), 4);
    }

    #[test]
    fn test_www_needs_word_boundary() {
        let mut audit = NoiseAudit::new();
        let result = strip_urls("awww.example.com", &mut audit);
        assert_eq!(result, "awww.example.com");
        assert!(audit.is_empty());
    }

    #[test]
    fn test_audit_accumulates_across_calls() {
        let mut audit = NoiseAudit::new();
        let text = strip_tags("<i>go</i> to www.x.org", &mut audit);
        let text = strip_urls(&text, &mut audit);
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["go", "to"]);
        assert_eq!(audit.as_str(), "<i> </i> www.x.org ");
    }

    #[test]
    fn test_strip_noise_starts_fresh() {
        let first = strip_noise("<b>x</b>");
        let second = strip_noise("www.y.com");
        assert_eq!(first.removed.as_str(), "<b> </b> ");
        assert_eq!(second.removed.as_str(), "www.y.com ");
    }

    #[test]
    fn test_filter_web_text_example() {
        let result = filter_web_text("Visit <a href='x'>here</a> or www.example.com now");
        assert_eq!(result, "Visit  here  or   now");
        assert_eq!(
            result.split_whitespace().collect::<Vec<_>>(),
            vec!["Visit", "here", "or", "now"]
        );
    }

    #[test]
    fn test_filter_web_text_matches_two_pass_strip() {
        let text = "<div>Read www.news.com/story today</div>";
        assert_eq!(filter_web_text(text), strip_noise(text).filtered);
    }

    #[test]
    fn test_refine_collapses_punctuation() {
        assert_eq!(refine_special_chars(Some("a, b!  c.")).as_deref(), Some("a b c"));
        assert_eq!(refine_text("...leading and trailing!!!"), "leading and trailing");
        assert_eq!(refine_text("don't_stop:now"), "don t stop now");
    }

    #[test]
    fn test_refine_none_is_none() {
        assert_eq!(refine_special_chars(None), None);
    }

    #[test]
    fn test_refine_keeps_non_ascii_text() {
        assert_eq!(refine_text("café — olé"), "café — olé");
    }

    proptest! {
        #[test]
        fn prop_text_without_tag_delimiters_is_untouched(text in "[^<>\n]{0,64}") {
            let mut audit = NoiseAudit::new();
            let result = strip_tags(&text, &mut audit);
            prop_assert_eq!(result, text);
            prop_assert!(audit.is_empty());
        }

        #[test]
        fn prop_strip_urls_leaves_no_url(
            text in "((https?://|ftp://|www\\.|www)[a-z0-9./?=&,;:-]{0,10}|[ a-z.,;:!<>_]{0,5}){0,8}"
        ) {
            let mut audit = NoiseAudit::new();
            let result = strip_urls(&text, &mut audit);
            prop_assert!(!URL_RE.is_match(&result), "url left in {:?}", result);
        }

        #[test]
        fn prop_refine_is_idempotent(text in "\\PC{0,64}") {
            let once = refine_text(&text);
            prop_assert_eq!(refine_text(&once), once.clone());
        }

        #[test]
        fn prop_refine_leaves_no_ascii_punctuation(text in "[ -~]{0,64}") {
            let refined = refine_text(&text);
            prop_assert!(!refined.chars().any(|c| c.is_ascii_punctuation()));
        }
    }
}
