//! Store construction from files, units or an external frame

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::ingestion::{ErrorPolicy, ParserRegistry};
use crate::store::{StoreMode, StructuredStore};
use crate::tabular::DataFrame;
use crate::types::TextUnit;

/// Builds a [`StructuredStore`] from exactly one kind of input
///
/// Inputs are validated before any file is opened, so a conflicting
/// configuration never triggers parsing.
pub struct StoreBuilder<'r> {
    registry: &'r ParserRegistry,
    policy: ErrorPolicy,
    files: Option<Vec<PathBuf>>,
    units: Option<Vec<TextUnit>>,
    frame: Option<Arc<DataFrame>>,
}

impl<'r> StoreBuilder<'r> {
    /// Create a builder; the error policy defaults to the registry's config
    pub fn new(registry: &'r ParserRegistry) -> Self {
        Self {
            registry,
            policy: registry.config().error_policy,
            files: None,
            units: None,
            frame: None,
        }
    }

    /// Override the per-unit error policy used when parsing files
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add files to parse, in order
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files
            .get_or_insert_with(Vec::new)
            .extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add already parsed units
    pub fn units(mut self, units: Vec<TextUnit>) -> Self {
        self.units.get_or_insert_with(Vec::new).extend(units);
        self
    }

    /// Wrap a caller-owned frame
    pub fn frame(mut self, frame: Arc<DataFrame>) -> Self {
        self.frame = Some(frame);
        self
    }

    fn document_count(&self) -> Option<usize> {
        match (&self.files, &self.units) {
            (None, None) => None,
            (files, units) => Some(files.as_ref().map_or(0, Vec::len) + units.as_ref().map_or(0, Vec::len)),
        }
    }

    /// Validate inputs, parse files if in documents mode, and build the store
    pub fn build(self) -> Result<StructuredStore> {
        let mode = StoreMode::select(self.document_count(), self.frame.is_some())?;
        tracing::debug!("Store inputs select {} mode", mode);

        if let Some(frame) = self.frame {
            return Ok(StructuredStore::from_frame(frame));
        }

        let mut units = self.units.unwrap_or_default();
        for path in self.files.unwrap_or_default() {
            let parser = self.registry.resolve_path(&path)?;
            let parsed = parser.parse(&path, self.policy)?;
            tracing::debug!("{} produced {} units", path.display(), parsed.len());
            units.extend(parsed);
        }

        Ok(StructuredStore::from_units(units))
    }
}
