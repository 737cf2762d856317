//! File type detection

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported file types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
    /// CSV file
    Csv,
    /// Excel spreadsheet (.xlsx, .xlsm, .xls, .ods)
    Xlsx,
    /// Unknown file type
    Unknown,
}

impl FileType {
    /// Detect file type from extension, with or without a leading dot
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "csv" => Self::Csv,
            "xlsx" | "xlsm" | "xls" | "ods" => Self::Xlsx,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a path's extension
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Parsed into text units by a format parser
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Pdf | Self::Docx)
    }

    /// Loaded as rows into a frame, bypassing text parsing
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv | Self::Xlsx)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
            Self::Csv => "CSV",
            Self::Xlsx => "Excel Spreadsheet",
            Self::Unknown => "Unknown",
        }
    }
}
