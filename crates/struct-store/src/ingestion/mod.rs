//! Document parsing into text units

pub mod dependency;
mod docx;
pub mod page_labels;
mod parser;
mod pdf;
mod registry;
pub mod text_cleanup;

pub use dependency::Dependency;
pub use docx::DocxParser;
pub use parser::{ErrorPolicy, FormatParser};
pub use pdf::PdfParser;
pub use registry::{ParserConstructor, ParserRegistry};
