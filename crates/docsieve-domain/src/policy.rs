//! Policy module - store and term-vector settings applied to content fields

use std::fmt;

/// Term-vector retention for an indexed field
///
/// Ranges from no per-document statistics to full position and offset
/// detail (needed for highlighting and relevance feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TermVectorMode {
    /// No term vector
    None,

    /// Term frequencies only
    #[default]
    Yes,

    /// Term frequencies and positions
    WithPositions,

    /// Term frequencies and character offsets
    WithOffsets,

    /// Term frequencies, positions and offsets
    WithPositionsAndOffsets,
}

impl TermVectorMode {
    /// Canonical configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            TermVectorMode::None => "NONE",
            TermVectorMode::Yes => "YES",
            TermVectorMode::WithPositions => "WITH_POSITIONS",
            TermVectorMode::WithOffsets => "WITH_OFFSETS",
            TermVectorMode::WithPositionsAndOffsets => "WITH_POSITIONS_AND_OFFSETS",
        }
    }

    /// Parse a mode, accepting the legacy `NO` and `WITH_POSITIONS_OFFSETS` spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "NONE" | "NO" => Some(TermVectorMode::None),
            "YES" => Some(TermVectorMode::Yes),
            "WITH_POSITIONS" => Some(TermVectorMode::WithPositions),
            "WITH_OFFSETS" => Some(TermVectorMode::WithOffsets),
            "WITH_POSITIONS_AND_OFFSETS" | "WITH_POSITIONS_OFFSETS" => {
                Some(TermVectorMode::WithPositionsAndOffsets)
            }
            _ => None,
        }
    }
}

impl fmt::Display for TermVectorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TermVectorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid term vector mode: {}", s))
    }
}

/// Whether content fields keep their literal value in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorePolicy {
    /// Store the field value
    Store,

    /// Index only
    #[default]
    NoStore,
}

impl StorePolicy {
    /// Canonical configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            StorePolicy::Store => "STORE",
            StorePolicy::NoStore => "NO_STORE",
        }
    }

    /// Parse a policy, accepting `YES`/`NO` as well
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "STORE" | "YES" => Some(StorePolicy::Store),
            "NO_STORE" | "NO" => Some(StorePolicy::NoStore),
            _ => None,
        }
    }

    /// Get the stored flag for a content field
    pub fn is_stored(&self) -> bool {
        matches!(self, StorePolicy::Store)
    }
}

impl fmt::Display for StorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid store policy: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(TermVectorMode::default(), TermVectorMode::Yes);
        assert_eq!(StorePolicy::default(), StorePolicy::NoStore);
    }

    #[test]
    fn test_term_vector_legacy_spellings() {
        assert_eq!(TermVectorMode::parse("no"), Some(TermVectorMode::None));
        assert_eq!(
            TermVectorMode::parse("WITH_POSITIONS_OFFSETS"),
            Some(TermVectorMode::WithPositionsAndOffsets)
        );
        assert_eq!(TermVectorMode::parse("sometimes"), None);
    }

    #[test]
    fn test_term_vector_round_trip_through_str() {
        for mode in [
            TermVectorMode::None,
            TermVectorMode::Yes,
            TermVectorMode::WithPositions,
            TermVectorMode::WithOffsets,
            TermVectorMode::WithPositionsAndOffsets,
        ] {
            assert_eq!(mode.as_str().parse::<TermVectorMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_store_policy_parse() {
        assert_eq!("YES".parse::<StorePolicy>(), Ok(StorePolicy::Store));
        assert_eq!("no_store".parse::<StorePolicy>(), Ok(StorePolicy::NoStore));
        assert!("maybe".parse::<StorePolicy>().is_err());
        assert!(StorePolicy::Store.is_stored());
        assert!(!StorePolicy::NoStore.is_stored());
    }
}
