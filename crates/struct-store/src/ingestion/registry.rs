//! Format identifier to parser resolution

use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::path::Path;

use crate::config::IngestConfig;
use crate::error::{Error, Result};
use crate::ingestion::{DocxParser, FormatParser, PdfParser};
use crate::types::FileType;

/// Builds a parser instance from the ingestion configuration
pub type ParserConstructor = fn(&IngestConfig) -> Box<dyn FormatParser>;

struct Entry {
    construct: ParserConstructor,
    instance: OnceCell<Box<dyn FormatParser>>,
}

/// Maps file extensions to format parsers
///
/// Parsers are constructed on first resolution and reused afterwards.
/// Tabular formats are deliberately absent: rows bypass text parsing and
/// go through [`crate::tabular::TableLoader`] instead.
pub struct ParserRegistry {
    config: IngestConfig,
    entries: HashMap<FileType, Entry>,
}

impl ParserRegistry {
    /// Registry with the built-in PDF and Word parsers
    pub fn new(config: IngestConfig) -> Self {
        let mut registry = Self::empty(config);
        registry.register(FileType::Pdf, |config| Box::new(PdfParser::new(config.pdf.clone())));
        registry.register(FileType::Docx, |_| Box::new(DocxParser::new()));
        registry
    }

    /// Registry with no parsers
    pub fn empty(config: IngestConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Register (or replace) the parser for a file type
    pub fn register(&mut self, file_type: FileType, construct: ParserConstructor) {
        self.entries.insert(
            file_type,
            Entry {
                construct,
                instance: OnceCell::new(),
            },
        );
    }

    /// Configuration parsers are built with
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Resolve a format identifier such as `"pdf"` or `".DOCX"`
    pub fn resolve(&self, format: &str) -> Result<&dyn FormatParser> {
        let file_type = FileType::from_extension(format);
        self.resolve_type(file_type)
            .map_err(|_| Error::unsupported_format(format!("no parser registered for '{}'", format)))
    }

    /// Resolve the parser for a path by its extension
    pub fn resolve_path(&self, path: &Path) -> Result<&dyn FormatParser> {
        let file_type = FileType::from_path(path);
        self.resolve_type(file_type).map_err(|_| {
            Error::unsupported_format(format!(
                "no parser registered for '{}' ({})",
                path.display(),
                file_type.display_name()
            ))
        })
    }

    /// Resolve the parser for a file type
    pub fn resolve_type(&self, file_type: FileType) -> Result<&dyn FormatParser> {
        let entry = self.entries.get(&file_type).ok_or_else(|| {
            Error::unsupported_format(format!("no parser registered for {}", file_type.display_name()))
        })?;

        let parser = entry.instance.get_or_init(|| {
            tracing::debug!("Constructing {} parser", file_type.display_name());
            (entry.construct)(&self.config)
        });
        Ok(parser.as_ref())
    }

    /// Registered file types, sorted by display name
    pub fn formats(&self) -> Vec<FileType> {
        let mut formats: Vec<FileType> = self.entries.keys().copied().collect();
        formats.sort_by_key(|f| f.display_name());
        formats
    }

    /// Registered file types whose decoding library is compiled in
    pub fn available(&self) -> Vec<FileType> {
        self.formats()
            .into_iter()
            .filter(|f| {
                self.resolve_type(*f)
                    .map(|p| p.dependency().available)
                    .unwrap_or(false)
            })
            .collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}
