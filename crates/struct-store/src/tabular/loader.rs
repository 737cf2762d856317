//! CSV and spreadsheet loading into frames

use std::path::Path;

use crate::config::TabularConfig;
use crate::error::{Error, Result};
use crate::tabular::{Cell, DataFrame};
use crate::types::FileType;

/// Loads tabular files into [`DataFrame`]s
#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    config: TabularConfig,
}

impl TableLoader {
    pub fn new(config: TabularConfig) -> Self {
        Self { config }
    }

    /// Load a CSV or spreadsheet file, chosen by extension
    pub fn load(&self, path: &Path) -> Result<DataFrame> {
        match FileType::from_path(path) {
            FileType::Csv => self.load_csv(path),
            FileType::Xlsx => self.load_spreadsheet(path),
            other => Err(Error::unsupported_format(format!(
                "'{}' is not a tabular file ({})",
                path.display(),
                other.display_name()
            ))),
        }
    }

    /// Load a delimited text file
    pub fn load_csv(&self, path: &Path) -> Result<DataFrame> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::parse(path, format!("cannot open file: {}", e)))?;
        self.read_csv(file, path)
    }

    /// Read delimited text from any reader; `origin` is used in error messages
    pub fn read_csv<R: std::io::Read>(&self, reader: R, origin: &Path) -> Result<DataFrame> {
        let delimiter = u8::try_from(self.config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                Error::invalid_configuration(format!(
                    "CSV delimiter {:?} is not a single ASCII character",
                    self.config.delimiter
                ))
            })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| Error::parse(origin, format!("record {}: {}", index, e)))?;
            records.push(record);
        }

        let mut records = records.into_iter();
        let columns: Vec<String> = if self.config.has_headers {
            match records.next() {
                Some(header) => header.iter().map(str::to_string).collect(),
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };

        let rows: Vec<Vec<Cell>> = records
            .map(|record| record.iter().map(Cell::infer).collect())
            .collect();

        let columns = if self.config.has_headers {
            columns
        } else {
            positional_columns(rows.first().map_or(0, Vec::len))
        };

        tracing::debug!("Loaded {} rows x {} columns from {}", rows.len(), columns.len(), origin.display());
        DataFrame::new(columns, rows).map_err(|e| Error::parse(origin, e.to_string()))
    }

    #[cfg(feature = "xlsx")]
    fn load_spreadsheet(&self, path: &Path) -> Result<DataFrame> {
        use calamine::Reader;

        let mut workbook = calamine::open_workbook_auto(path).map_err(|e| Error::parse(path, e.to_string()))?;

        let sheet = match &self.config.sheet {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| Error::parse(path, "workbook has no sheets"))?,
        };

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| Error::parse(path, format!("sheet '{}': {}", sheet, e)))?;

        let mut rows = range.rows().map(|row| row.iter().map(spreadsheet_cell).collect::<Vec<_>>());
        let columns: Vec<String> = if self.config.has_headers {
            rows.next()
                .map(|header| header.iter().map(Cell::to_string).collect())
                .unwrap_or_default()
        } else {
            positional_columns(range.width())
        };
        let rows: Vec<Vec<Cell>> = rows.collect();

        tracing::debug!("Loaded sheet '{}' ({} rows) from {}", sheet, rows.len(), path.display());
        DataFrame::new(columns, rows).map_err(|e| Error::parse(path, e.to_string()))
    }

    #[cfg(not(feature = "xlsx"))]
    fn load_spreadsheet(&self, _path: &Path) -> Result<DataFrame> {
        Err(Error::missing_dependency(&crate::ingestion::dependency::CALAMINE))
    }
}

fn positional_columns(width: usize) -> Vec<String> {
    (0..width).map(|i| i.to_string()).collect()
}

#[cfg(feature = "xlsx")]
fn spreadsheet_cell(data: &calamine::Data) -> Cell {
    match data {
        calamine::Data::Empty => Cell::Empty,
        calamine::Data::String(s) => Cell::String(s.clone()),
        calamine::Data::Float(f) => Cell::Float(*f),
        calamine::Data::Int(i) => Cell::Integer(*i),
        calamine::Data::Bool(b) => Cell::Boolean(*b),
        calamine::Data::DateTimeIso(s) | calamine::Data::DurationIso(s) => Cell::String(s.clone()),
        other => Cell::String(other.to_string()),
    }
}
