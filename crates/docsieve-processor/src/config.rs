//! Configuration for the processor

use crate::error::{ProcessorError, Result};
use docsieve_domain::{StorePolicy, TermVectorMode};
use serde::{Deserialize, Serialize};

/// Process-wide indexing policy
///
/// Read once at startup and shared read-only by every document. The store
/// and term-vector settings apply to analyzed content fields only; the
/// identifier and metadata fields are always stored without term vectors.
///
/// # Examples
///
/// ```
/// use docsieve_processor::ProcessorConfig;
/// use docsieve_domain::{StorePolicy, TermVectorMode};
///
/// let config = ProcessorConfig::from_toml(r#"
///     store_policy = "YES"
///     term_vector = "WITH_POSITIONS_OFFSETS"
/// "#).unwrap();
///
/// assert_eq!(config.store_policy, StorePolicy::Store);
/// assert_eq!(config.term_vector, TermVectorMode::WithPositionsAndOffsets);
/// assert!(!config.index_meta);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Store policy for content fields
    /// Default: NO_STORE
    #[serde(with = "policy_str")]
    pub store_policy: StorePolicy,

    /// Term-vector mode for content fields
    /// Default: YES
    #[serde(with = "policy_str")]
    pub term_vector: TermVectorMode,

    /// Attach the `full` field computed by the structural-parse adapter
    /// Default: false (computed and logged, not indexed)
    pub attach_structural_full: bool,

    /// Index the removed tags and URLs as a `meta` field (plain adapter)
    /// Default: false
    pub index_meta: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            store_policy: StorePolicy::NoStore,
            term_vector: TermVectorMode::Yes,
            attach_structural_full: false,
            index_meta: false,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| ProcessorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ProcessorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

/// Serde adapter for policy enums spelled as configuration strings
mod policy_str {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
