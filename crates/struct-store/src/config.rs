//! Configuration for parsing and table loading

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::ingestion::ErrorPolicy;

/// Main ingestion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// How per-unit decode failures are handled
    #[serde(default)]
    pub error_policy: ErrorPolicy,
    /// PDF text extraction options
    #[serde(default)]
    pub pdf: PdfConfig,
    /// CSV/spreadsheet loading options
    #[serde(default)]
    pub tabular: TabularConfig,
}

impl IngestConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Set the error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

/// PDF text extraction configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Replace glyph-name artifacts and ligatures with plain characters
    #[serde(default)]
    pub normalize_glyphs: bool,
    /// Trim each line and drop blank lines and NUL characters
    #[serde(default)]
    pub trim_lines: bool,
}

/// Tabular source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularConfig {
    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// First row holds column names
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
    /// Worksheet to load (default: first sheet)
    #[serde(default)]
    pub sheet: Option<String>,
}

fn default_delimiter() -> char { ',' }
fn default_has_headers() -> bool { true }

impl Default for TabularConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: default_has_headers(),
            sheet: None,
        }
    }
}
