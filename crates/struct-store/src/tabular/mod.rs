//! Tabular data held by external-mode stores

mod frame;
mod loader;

pub use frame::{Cell, DataFrame};
pub use loader::TableLoader;
