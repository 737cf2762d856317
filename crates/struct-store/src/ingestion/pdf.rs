//! PDF parser: one text unit per page, labelled

use once_cell::unsync::OnceCell;
use std::fmt;
use std::path::Path;

use crate::config::PdfConfig;
use crate::error::{Error, Result};
use crate::ingestion::dependency::{Dependency, LOPDF};
use crate::ingestion::text_cleanup::{trim_lines, GlyphTable};
use crate::ingestion::{ErrorPolicy, FormatParser};
use crate::types::{FileType, TextUnit};

/// Parses PDF files page by page
pub struct PdfParser {
    config: PdfConfig,
    decoder: OnceCell<PdfDecoder>,
}

impl PdfParser {
    /// Create a parser; the decoder is acquired on first parse
    pub fn new(config: PdfConfig) -> Self {
        Self {
            config,
            decoder: OnceCell::new(),
        }
    }

    fn decoder(&self) -> Result<&PdfDecoder> {
        self.decoder.get_or_try_init(|| PdfDecoder::load(&self.config))
    }
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new(PdfConfig::default())
    }
}

impl FormatParser for PdfParser {
    fn file_type(&self) -> FileType {
        FileType::Pdf
    }

    fn dependency(&self) -> &'static Dependency {
        &LOPDF
    }

    fn parse(&self, path: &Path, policy: ErrorPolicy) -> Result<Vec<TextUnit>> {
        let decoder = self.decoder()?;
        tracing::debug!("Parsing PDF {} (errors: {})", path.display(), policy);

        let units = decoder.decode(path, policy)?;
        tracing::info!("Extracted {} pages from {}", units.len(), path.display());
        Ok(units)
    }
}

/// Text post-processing held by an initialized decoder
#[cfg_attr(not(feature = "pdf"), allow(dead_code))]
struct Cleanup {
    glyphs: Option<GlyphTable>,
    trim_lines: bool,
}

#[cfg_attr(not(feature = "pdf"), allow(dead_code))]
impl Cleanup {
    fn new(config: &PdfConfig) -> Self {
        Self {
            glyphs: config.normalize_glyphs.then(GlyphTable::new),
            trim_lines: config.trim_lines,
        }
    }

    fn apply(&self, text: String) -> String {
        let text = match &self.glyphs {
            Some(table) => table.normalize(&text),
            None => text,
        };
        if self.trim_lines {
            trim_lines(&text)
        } else {
            text
        }
    }
}

#[cfg(feature = "pdf")]
struct PdfDecoder {
    cleanup: Cleanup,
}

#[cfg(feature = "pdf")]
impl PdfDecoder {
    fn load(config: &PdfConfig) -> Result<Self> {
        Ok(Self {
            cleanup: Cleanup::new(config),
        })
    }

    fn decode(&self, path: &Path, policy: ErrorPolicy) -> Result<Vec<TextUnit>> {
        use crate::ingestion::page_labels::read_page_labels;

        let doc = {
            let file = std::fs::File::open(path)
                .map_err(|e| Error::parse(path, format!("cannot open file: {}", e)))?;
            lopdf::Document::load_from(file).map_err(|e| Error::parse(path, e.to_string()))?
        };

        // get_pages is keyed by 1-based page number, ascending
        let pages = doc.get_pages();
        let page_count = u32::try_from(pages.len())
            .map_err(|_| Error::parse(path, "page count out of range"))?;
        let labels = read_page_labels(&doc).labels(page_count);

        let pages = pages
            .keys()
            .zip(labels)
            .map(|(page_number, label)| (label, doc.extract_text(&[*page_number])));
        collect_units(path, policy, &self.cleanup, pages)
    }
}

/// Turn per-page extraction results into units, applying the error policy
#[cfg_attr(not(feature = "pdf"), allow(dead_code))]
fn collect_units<I, E>(path: &Path, policy: ErrorPolicy, cleanup: &Cleanup, pages: I) -> Result<Vec<TextUnit>>
where
    I: IntoIterator<Item = (String, std::result::Result<String, E>)>,
    E: fmt::Display,
{
    let mut units = Vec::new();
    for (index, (label, extracted)) in pages.into_iter().enumerate() {
        match extracted {
            Ok(text) => units.push(TextUnit::page(cleanup.apply(text), label)),
            Err(e) if policy.skips_units() => {
                tracing::warn!(
                    "Skipping page {} (label {}) of {}: {}",
                    index,
                    label,
                    path.display(),
                    e
                );
            }
            Err(e) => {
                return Err(Error::parse(
                    path,
                    format!("page {} (label {}): {}", index, label, e),
                ));
            }
        }
    }
    Ok(units)
}

#[cfg(not(feature = "pdf"))]
enum PdfDecoder {}

#[cfg(not(feature = "pdf"))]
impl PdfDecoder {
    fn load(_config: &PdfConfig) -> Result<Self> {
        Err(Error::missing_dependency(&LOPDF))
    }

    fn decode(&self, _path: &Path, _policy: ErrorPolicy) -> Result<Vec<TextUnit>> {
        match *self {}
    }
}
