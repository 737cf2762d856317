//! Word document parser
//!
//! Emits the whole body as a single unit with empty metadata. Word files
//! have no stable page boundaries, so unlike PDF there is no per-page split.

use once_cell::unsync::OnceCell;
use std::path::Path;

use crate::error::Result;
use crate::ingestion::dependency::{Dependency, DOCX_RS};
use crate::ingestion::{ErrorPolicy, FormatParser};
use crate::types::{FileType, TextUnit};

/// Parses `.docx` files into one text unit
#[derive(Default)]
pub struct DocxParser {
    decoder: OnceCell<DocxDecoder>,
}

impl DocxParser {
    /// Create a parser; the decoder is acquired on first parse
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormatParser for DocxParser {
    fn file_type(&self) -> FileType {
        FileType::Docx
    }

    fn dependency(&self) -> &'static Dependency {
        &DOCX_RS
    }

    /// The document is one unit, so a decode failure always aborts
    /// regardless of `policy`.
    fn parse(&self, path: &Path, policy: ErrorPolicy) -> Result<Vec<TextUnit>> {
        let decoder = self.decoder.get_or_try_init(DocxDecoder::load)?;
        tracing::debug!("Parsing Word document {} (errors: {})", path.display(), policy);

        let text = decoder.decode(path)?;
        tracing::info!("Extracted {} characters from {}", text.len(), path.display());
        Ok(vec![TextUnit::new(text)])
    }
}

#[cfg(feature = "docx")]
struct DocxDecoder;

#[cfg(feature = "docx")]
impl DocxDecoder {
    fn load() -> Result<Self> {
        Ok(Self)
    }

    fn decode(&self, path: &Path) -> Result<String> {
        use crate::error::Error;
        use std::io::Read;

        let mut data = Vec::new();
        {
            let mut file = std::fs::File::open(path)
                .map_err(|e| Error::parse(path, format!("cannot open file: {}", e)))?;
            file.read_to_end(&mut data)
                .map_err(|e| Error::parse(path, format!("cannot read file: {}", e)))?;
        }

        let doc = docx_rs::read_docx(&data).map_err(|e| Error::parse(path, e.to_string()))?;

        let mut body = BodyText::default();
        for child in &doc.document.children {
            body.document_child(child);
        }
        Ok(body.lines.join("\n"))
    }
}

/// Body text collected one line per paragraph, including paragraphs
/// inside tables and content controls
#[cfg(feature = "docx")]
#[derive(Default)]
struct BodyText {
    lines: Vec<String>,
}

#[cfg(feature = "docx")]
impl BodyText {
    fn document_child(&mut self, child: &docx_rs::DocumentChild) {
        use docx_rs::DocumentChild;

        match child {
            DocumentChild::Paragraph(p) => self.paragraph(p),
            DocumentChild::Table(t) => self.table(t),
            DocumentChild::StructuredDataTag(sdt) => self.block_tag(sdt),
            _ => {}
        }
    }

    fn paragraph(&mut self, paragraph: &docx_rs::Paragraph) {
        let mut line = String::new();
        inline_text(&paragraph.children, &mut line);
        self.lines.push(line);
    }

    fn table(&mut self, table: &docx_rs::Table) {
        use docx_rs::{TableCellContent, TableChild, TableRowChild};

        for TableChild::TableRow(row) in &table.rows {
            for TableRowChild::TableCell(cell) in &row.cells {
                for content in &cell.children {
                    match content {
                        TableCellContent::Paragraph(p) => self.paragraph(p),
                        TableCellContent::Table(t) => self.table(t),
                        TableCellContent::StructuredDataTag(sdt) => self.block_tag(sdt),
                        TableCellContent::TableOfContents(_) => {}
                    }
                }
            }
        }
    }

    // Block-level content control; loose runs form their own line
    fn block_tag(&mut self, sdt: &docx_rs::StructuredDataTag) {
        use docx_rs::StructuredDataTagChild;

        let mut loose = String::new();
        for child in &sdt.children {
            match child {
                StructuredDataTagChild::Run(run) => run_text(run, &mut loose),
                StructuredDataTagChild::Paragraph(p) => self.paragraph(p),
                StructuredDataTagChild::Table(t) => self.table(t),
                StructuredDataTagChild::StructuredDataTag(nested) => self.block_tag(nested),
                _ => {}
            }
        }
        if !loose.is_empty() {
            self.lines.push(loose);
        }
    }
}

#[cfg(feature = "docx")]
fn inline_text(children: &[docx_rs::ParagraphChild], out: &mut String) {
    use docx_rs::{InsertChild, MoveToChild, ParagraphChild, StructuredDataTagChild};

    for child in children {
        match child {
            ParagraphChild::Run(run) => run_text(run, out),
            ParagraphChild::Hyperlink(link) => inline_text(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let InsertChild::Run(run) = child {
                        run_text(run, out);
                    }
                }
            }
            ParagraphChild::MoveTo(moved) => {
                for child in &moved.children {
                    if let MoveToChild::Run(run) = child {
                        run_text(run, out);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(sdt) => {
                for child in &sdt.children {
                    match child {
                        StructuredDataTagChild::Run(run) => run_text(run, out),
                        StructuredDataTagChild::Paragraph(p) => inline_text(&p.children, out),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(feature = "docx")]
fn run_text(run: &docx_rs::Run, out: &mut String) {
    use docx_rs::RunChild;

    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) | RunChild::PTab(_) => out.push('\t'),
            RunChild::Break(_) | RunChild::CarriageReturn(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(not(feature = "docx"))]
enum DocxDecoder {}

#[cfg(not(feature = "docx"))]
impl DocxDecoder {
    fn load() -> Result<Self> {
        Err(crate::error::Error::missing_dependency(&DOCX_RS))
    }

    fn decode(&self, _path: &Path) -> Result<String> {
        match *self {}
    }
}
