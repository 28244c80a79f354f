//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use docsieve_analysis::{AnalyzerConfig, EnglishAnalyzer};
use docsieve_processor::ProcessorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// ```toml
/// stopword_file = "/etc/docsieve/stopwords.txt"
///
/// [processor]
/// store_policy = "STORE"
/// term_vector = "WITH_POSITIONS"
///
/// [analyzer]
/// stem = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Indexing policy shared by every document
    #[serde(default)]
    pub processor: ProcessorConfig,

    /// Analyzer token pipeline settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Optional stopword file replacing the built-in list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopword_file: Option<PathBuf>,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".docsieve").join("config.toml"))
    }

    /// Load configuration from an explicit file, or from the default path.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Build the English analyzer described by this configuration.
    pub fn build_analyzer(&self) -> Result<EnglishAnalyzer> {
        match &self.stopword_file {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("Failed to read stopwords '{}': {}", path.display(), e))
                })?;
                Ok(EnglishAnalyzer::with_stopwords(self.analyzer.clone(), contents.lines())?)
            }
            None => Ok(EnglishAnalyzer::new(self.analyzer.clone())),
        }
    }
}
