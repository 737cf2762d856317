//! Structured store and its construction-mode gate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::tabular::{Cell, DataFrame};
use crate::types::TextUnit;

/// How a store was constructed; fixed for the store's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Internal row/field table assembled from text units
    Documents,
    /// Read-only view over a caller-owned frame
    External,
}

impl StoreMode {
    /// Decide the mode from the construction inputs
    ///
    /// `documents` is the size of the supplied document collection, or
    /// `None` when no collection was supplied at all. Runs before any
    /// document is parsed.
    ///
    /// Supplying neither input is rejected instead of yielding an empty
    /// documents-mode store; pass `Some(0)` (an empty collection) to get one.
    pub fn select(documents: Option<usize>, external: bool) -> Result<Self> {
        match (documents, external) {
            (Some(count), true) if count > 0 => Err(Error::invalid_configuration(format!(
                "both an external frame and {} documents were supplied; a store is built from exactly one",
                count
            ))),
            (_, true) => Ok(Self::External),
            (Some(_), false) => Ok(Self::Documents),
            (None, false) => Err(Error::invalid_configuration(
                "neither documents nor an external frame were supplied",
            )),
        }
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Documents => f.write_str("documents"),
            Self::External => f.write_str("external"),
        }
    }
}

/// Row/field table owned by a documents-mode store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl StructTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Data a store hands to a query engine
#[derive(Debug, Clone, Copy)]
pub enum StoreBacking<'a> {
    /// Internal table of a documents-mode store
    Table(&'a StructTable),
    /// Caller-owned frame of an external-mode store
    Frame(&'a Arc<DataFrame>),
}

#[derive(Debug)]
enum Backing {
    Documents { table: StructTable, unindexed: usize },
    External(Arc<DataFrame>),
}

/// Queryable index over structured data
///
/// Built either from text units (documents mode) or around an external
/// frame (external mode). Neither mode accepts insertion after
/// construction.
#[derive(Debug)]
pub struct StructuredStore {
    backing: Backing,
}

impl StructuredStore {
    /// Construct from at most one of a unit collection and an external frame
    pub fn new(units: Option<Vec<TextUnit>>, frame: Option<Arc<DataFrame>>) -> Result<Self> {
        StoreMode::select(units.as_ref().map(Vec::len), frame.is_some())?;
        match frame {
            Some(frame) => Ok(Self::from_frame(frame)),
            None => Ok(Self::from_units(units.unwrap_or_default())),
        }
    }

    /// Documents-mode store
    ///
    /// Structured tables are not assembled from free text: the table stays
    /// empty and the supplied units are counted in
    /// [`unindexed_units`](Self::unindexed_units).
    pub fn from_units(units: Vec<TextUnit>) -> Self {
        let unindexed = units.len();
        if unindexed > 0 {
            tracing::warn!(
                "{} text units supplied to a documents-mode store were not indexed; \
                 building structured tables from documents is not supported",
                unindexed
            );
        }
        tracing::info!("Created structured store in {} mode", StoreMode::Documents);

        Self {
            backing: Backing::Documents {
                table: StructTable::default(),
                unindexed,
            },
        }
    }

    /// External-mode store sharing the caller's frame
    pub fn from_frame(frame: Arc<DataFrame>) -> Self {
        let (rows, columns) = frame.shape();
        tracing::info!(
            "Created structured store in {} mode over a {}x{} frame",
            StoreMode::External,
            rows,
            columns
        );

        Self {
            backing: Backing::External(frame),
        }
    }

    pub fn mode(&self) -> StoreMode {
        match self.backing {
            Backing::Documents { .. } => StoreMode::Documents,
            Backing::External(_) => StoreMode::External,
        }
    }

    /// Backing data for query execution
    pub fn backing(&self) -> StoreBacking<'_> {
        match &self.backing {
            Backing::Documents { table, .. } => StoreBacking::Table(table),
            Backing::External(frame) => StoreBacking::Frame(frame),
        }
    }

    /// Internal table, in documents mode
    pub fn table(&self) -> Option<&StructTable> {
        match &self.backing {
            Backing::Documents { table, .. } => Some(table),
            Backing::External(_) => None,
        }
    }

    /// External frame, in external mode
    pub fn frame(&self) -> Option<&Arc<DataFrame>> {
        match &self.backing {
            Backing::Documents { .. } => None,
            Backing::External(frame) => Some(frame),
        }
    }

    /// Units supplied at construction that did not make it into the table
    pub fn unindexed_units(&self) -> usize {
        match self.backing {
            Backing::Documents { unindexed, .. } => unindexed,
            Backing::External(_) => 0,
        }
    }

    /// Insert more units; no store mode supports this
    pub fn insert(&mut self, units: Vec<TextUnit>) -> Result<()> {
        let reason = match self.backing {
            Backing::Documents { .. } => "inserting documents into a structured store is not supported",
            Backing::External(_) => "store is a read-only view over an external frame",
        };
        Err(Error::unsupported_operation(format!(
            "cannot insert {} units into {} store: {}",
            units.len(),
            self.mode(),
            reason
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn frame() -> Arc<DataFrame> {
        Arc::new(
            DataFrame::new(
                vec!["name".to_string(), "age".to_string()],
                vec![vec![Cell::String("Ada".to_string()), Cell::Integer(36)]],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_select_mode() {
        assert_eq!(StoreMode::select(Some(0), false).unwrap(), StoreMode::Documents);
        assert_eq!(StoreMode::select(Some(3), false).unwrap(), StoreMode::Documents);
        assert_eq!(StoreMode::select(None, true).unwrap(), StoreMode::External);
        assert_eq!(StoreMode::select(Some(0), true).unwrap(), StoreMode::External);
        assert_eq!(
            StoreMode::select(Some(1), true).unwrap_err().kind(),
            ErrorKind::InvalidConfiguration
        );
        assert_eq!(
            StoreMode::select(None, false).unwrap_err().kind(),
            ErrorKind::InvalidConfiguration
        );
    }

    #[test]
    fn test_both_inputs_rejected() {
        let err = StructuredStore::new(Some(vec![TextUnit::new("row")]), Some(frame())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        assert!(err.to_string().contains("1 documents"));
    }

    #[test]
    fn test_external_mode_shares_frame() {
        let df = frame();
        let mut store = StructuredStore::new(None, Some(Arc::clone(&df))).unwrap();

        assert_eq!(store.mode(), StoreMode::External);
        assert!(Arc::ptr_eq(store.frame().unwrap(), &df));
        assert!(store.table().is_none());
        assert!(matches!(store.backing(), StoreBacking::Frame(f) if Arc::ptr_eq(f, &df)));

        let err = store.insert(vec![TextUnit::new("late")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(err.to_string().contains("read-only"));
        assert_eq!(df.shape(), (1, 2));
    }

    #[test]
    fn test_documents_mode_builds_empty_table() {
        let mut store = StructuredStore::new(Some(vec![TextUnit::new("a"), TextUnit::new("b")]), None).unwrap();

        assert_eq!(store.mode(), StoreMode::Documents);
        assert!(store.table().unwrap().is_empty());
        assert!(store.frame().is_none());
        assert_eq!(store.unindexed_units(), 2);

        let err = store.insert(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn test_empty_documents_collection() {
        let store = StructuredStore::new(Some(Vec::new()), None).unwrap();
        assert_eq!(store.mode(), StoreMode::Documents);
        assert_eq!(store.unindexed_units(), 0);
        assert!(matches!(store.backing(), StoreBacking::Table(t) if t.columns().is_empty()));
    }
}
