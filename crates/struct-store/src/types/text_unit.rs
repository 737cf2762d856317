//! Text units: extracted text plus per-unit provenance metadata

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata key carrying a PDF page's human-facing label
pub const PAGE_LABEL: &str = "page_label";

/// Scalar metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl MetadataValue {
    /// Borrow the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Per-unit metadata, ordered by key
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A normalized unit of extracted text
///
/// Produced once per parse call and handed straight to a store builder.
/// Fields are private so a unit cannot change after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    text: String,
    #[serde(default)]
    metadata: Metadata,
}

impl TextUnit {
    /// Create a unit with empty metadata
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create a unit with metadata
    pub fn with_metadata(text: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Create a page unit carrying its label
    pub fn page(text: impl Into<String>, label: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(PAGE_LABEL.to_string(), MetadataValue::String(label.into()));
        Self::with_metadata(text, metadata)
    }

    /// Extracted text, possibly empty
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Metadata mapping, possibly empty
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up a metadata value
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Page label, for units produced from paginated formats
    pub fn page_label(&self) -> Option<&str> {
        self.get(PAGE_LABEL).and_then(MetadataValue::as_str)
    }

    /// SHA-256 over text and metadata, hex encoded
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());
        for (key, value) in &self.metadata {
            hasher.update([0u8]);
            hasher.update(key.as_bytes());
            hasher.update([0u8]);
            hasher.update(value.to_string().as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Split into owned parts
    pub fn into_parts(self) -> (String, Metadata) {
        (self.text, self.metadata)
    }
}
