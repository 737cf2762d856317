//! struct-store: document parsing into text units and structured stores
//!
//! Parsers turn PDF and Word files into [`TextUnit`]s (one per PDF page,
//! one per Word document) carrying provenance metadata such as the PDF
//! page label. A [`StructuredStore`] is then built either from those units
//! or around a caller-owned [`DataFrame`], and the construction mode it is
//! built in decides what it will accept afterwards.
//!
//! Decoding libraries sit behind the `pdf`, `docx` and `xlsx` features;
//! a parser whose library is not compiled in fails at parse time with
//! [`Error::MissingDependency`].

pub mod config;
pub mod error;
pub mod ingestion;
pub mod store;
pub mod tabular;
pub mod types;

pub use config::{IngestConfig, PdfConfig, TabularConfig};
pub use error::{Error, ErrorKind, Result};
pub use ingestion::{DocxParser, ErrorPolicy, FormatParser, ParserRegistry, PdfParser};
pub use store::{StoreBacking, StoreBuilder, StoreMode, StructTable, StructuredStore};
pub use tabular::{Cell, DataFrame, TableLoader};
pub use types::{FileType, Metadata, MetadataValue, TextUnit};
