//! Structured stores over parsed documents or external frames

mod builder;
mod structured;

pub use builder::StoreBuilder;
pub use structured::{StoreBacking, StoreMode, StructTable, StructuredStore};
