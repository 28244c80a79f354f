//! English Analyzer Implementation
//!
//! Standard bag-of-words analysis for English text:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Snowball Stemmer → "tok tok tok"
//! ```
//!
//! # Examples
//!
//! ```
//! use docsieve_analysis::EnglishAnalyzer;
//! use docsieve_domain::traits::Analyzer;
//!
//! let analyzer = EnglishAnalyzer::default();
//! let analyzed = analyzer.analyze("The runners were running", "content").unwrap();
//! assert_eq!(analyzed, "runner were run");
//! ```

use crate::AnalysisError;
use docsieve_domain::traits::Analyzer as AnalyzerTrait;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Classic English stopword list used by most Lucene-style analyzers
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Configuration for the English analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Lowercase tokens before stopword matching
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Drop stopwords
    #[serde(default = "default_true")]
    pub remove_stopwords: bool,

    /// Apply Snowball English stemming
    #[serde(default = "default_true")]
    pub stem: bool,

    /// Tokens shorter than this (in chars) are dropped
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

fn default_true() -> bool {
    true
}

fn default_min_token_len() -> usize {
    1
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: true,
            stem: true,
            min_token_len: default_min_token_len(),
        }
    }
}

/// Tokenizing, stopping and stemming analyzer for English
pub struct EnglishAnalyzer {
    config: AnalyzerConfig,
    stopwords: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl EnglishAnalyzer {
    /// Create an analyzer with the default stopword list
    pub fn new(config: AnalyzerConfig) -> Self {
        let stopwords = DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect();
        Self::build(config, stopwords)
    }

    /// Create an analyzer with a custom stopword list
    ///
    /// Words are trimmed and lowercased; blank entries and `#` comments are
    /// skipped, so the lines of a stopword file can be passed directly.
    pub fn with_stopwords<I, S>(config: AnalyzerConfig, words: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();

        if config.remove_stopwords && stopwords.is_empty() {
            return Err(AnalysisError::Stopwords(
                "stopword removal is enabled but the list is empty".to_string(),
            ));
        }

        Ok(Self::build(config, stopwords))
    }

    fn build(config: AnalyzerConfig, stopwords: HashSet<String>) -> Self {
        let stemmer = config.stem.then(|| Stemmer::create(Algorithm::English));
        Self {
            config,
            stopwords,
            stemmer,
        }
    }

    /// Get the analyzer configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Whether `word` is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Run the token pipeline and collect the surviving tokens
    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|raw| !raw.is_empty())
            .filter_map(|raw| {
                let token = if self.config.lowercase {
                    raw.to_lowercase()
                } else {
                    raw.to_string()
                };

                if self.config.remove_stopwords && self.stopwords.contains(&token) {
                    return None;
                }

                let token = match &self.stemmer {
                    Some(stemmer) => stemmer.stem(&token).into_owned(),
                    None => token,
                };

                (token.chars().count() >= self.config.min_token_len).then_some(token)
            })
            .collect()
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl fmt::Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("config", &self.config)
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl AnalyzerTrait for EnglishAnalyzer {
    type Error = AnalysisError;

    fn analyze(&self, text: &str, _field: &str) -> Result<String, Self::Error> {
        Ok(self.tokens(text).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_removed_and_lowercased() {
        let analyzer = EnglishAnalyzer::new(AnalyzerConfig {
            stem: false,
            ..AnalyzerConfig::default()
        });
        let result = analyzer.analyze("The Cat AND the Hat", "content").unwrap();
        assert_eq!(result, "cat hat");
    }

    #[test]
    fn test_stemming() {
        let analyzer = EnglishAnalyzer::default();
        assert_eq!(analyzer.tokens("connections connected"), vec!["connect", "connect"]);
    }

    #[test]
    fn test_splits_on_non_alphanumeric() {
        let analyzer = EnglishAnalyzer::new(AnalyzerConfig {
            stem: false,
            remove_stopwords: false,
            ..AnalyzerConfig::default()
        });
        assert_eq!(analyzer.tokens("e-mail: foo@bar"), vec!["e", "mail", "foo", "bar"]);
    }

    #[test]
    fn test_min_token_len() {
        let analyzer = EnglishAnalyzer::new(AnalyzerConfig {
            stem: false,
            remove_stopwords: false,
            min_token_len: 2,
            ..AnalyzerConfig::default()
        });
        assert_eq!(analyzer.tokens("x marks the spot"), vec!["marks", "the", "spot"]);
    }

    #[test]
    fn test_custom_stopwords_skip_comments() {
        let lines = ["# news stopwords", "said", "", "  Reuters "];
        let analyzer = EnglishAnalyzer::with_stopwords(
            AnalyzerConfig {
                stem: false,
                ..AnalyzerConfig::default()
            },
            lines,
        )
        .unwrap();

        assert!(analyzer.is_stopword("reuters"));
        assert!(!analyzer.is_stopword("the"));
        assert_eq!(analyzer.analyze("Reuters said the vote", "content").unwrap(), "the vote");
    }

    #[test]
    fn test_empty_stopword_list_rejected() {
        let result = EnglishAnalyzer::with_stopwords(AnalyzerConfig::default(), Vec::<String>::new());
        assert!(matches!(result, Err(AnalysisError::Stopwords(_))));
    }

    #[test]
    fn test_empty_text() {
        let analyzer = EnglishAnalyzer::default();
        assert_eq!(analyzer.analyze("", "content").unwrap(), "");
        assert_eq!(analyzer.analyze(" ,;. ", "content").unwrap(), "");
    }

    #[test]
    fn test_config_from_toml_uses_defaults() {
        let config: AnalyzerConfig = toml::from_str("stem = false").unwrap();
        assert!(!config.stem);
        assert!(config.remove_stopwords);
        assert_eq!(config.min_token_len, 1);
    }
}
