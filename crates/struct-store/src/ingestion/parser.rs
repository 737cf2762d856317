//! Format parser contract

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::ingestion::Dependency;
use crate::types::{FileType, TextUnit};

/// Handling of decode failures scoped to a single unit (e.g. one PDF page)
///
/// File-level failures always propagate regardless of policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Skip the failing unit and keep parsing
    #[default]
    Ignore,
    /// Abort the parse on the first failing unit
    Strict,
}

impl ErrorPolicy {
    /// Whether a failing unit should be skipped
    pub fn skips_units(&self) -> bool {
        matches!(self, Self::Ignore)
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Converts one file format into an ordered sequence of text units
///
/// Implementations hold no state beyond a lazily acquired decoder handle,
/// so one instance can serve any number of `parse` calls.
pub trait FormatParser {
    /// Format this parser reads
    fn file_type(&self) -> FileType;

    /// Decoding library this parser needs at parse time
    fn dependency(&self) -> &'static Dependency;

    /// Parse the file at `path` into units in document-native order
    fn parse(&self, path: &Path, policy: ErrorPolicy) -> Result<Vec<TextUnit>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_serde() {
        assert_eq!(serde_json::to_string(&ErrorPolicy::Strict).unwrap(), "\"strict\"");
        let policy: ErrorPolicy = serde_json::from_str("\"ignore\"").unwrap();
        assert_eq!(policy, ErrorPolicy::default());
        assert!(policy.skips_units());
        assert_eq!(ErrorPolicy::Strict.to_string(), "strict");
    }
}
