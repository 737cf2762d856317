//! Core types shared by parsers and stores

pub mod file_type;
pub mod text_unit;

pub use file_type::FileType;
pub use text_unit::{Metadata, MetadataValue, TextUnit};
