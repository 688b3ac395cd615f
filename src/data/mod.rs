//! Dataset loading and validation.
//!
//! The dataset is loaded once at startup and shared read-only by every render
//! pass. Load failures are fatal and propagated; nothing is rendered from a
//! partially decoded file.

mod record;

pub use record::Record;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::{XField, YField};
use crate::error::{ChartError, ChartResult};

/// Validated, ordered, read-only record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from records, rejecting empty input and non-finite
    /// field values.
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one record".to_owned(),
            ));
        }
        for record in &records {
            record.validate()?;
        }
        debug!(count = records.len(), "dataset validated");
        Ok(Self { records })
    }

    /// Loads and validates a dataset from a headed CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let reader = reader_builder()
            .from_path(path)
            .map_err(|source| ChartError::DatasetLoad {
                path: path.to_path_buf(),
                source,
            })?;
        Self::decode(reader, path)
    }

    /// Loads and validates a dataset from any CSV reader.
    ///
    /// The header row names the columns; missing or non-numeric fields fail
    /// the whole load rather than rendering corrupt coordinates.
    pub fn from_csv_reader(reader: impl Read) -> ChartResult<Self> {
        Self::decode(reader_builder().from_reader(reader), Path::new("<reader>"))
    }

    fn decode<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> ChartResult<Self> {
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row.map_err(|source| ChartError::DatasetLoad {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record);
        }
        Self::new(records)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `(min, max)` of an x-axis field across all records.
    #[must_use]
    pub fn x_extent(&self, field: XField) -> (f64, f64) {
        extent(self.records.iter().map(|record| record.x_value(field)))
    }

    /// Returns `(min, max)` of a y-axis field across all records.
    #[must_use]
    pub fn y_extent(&self, field: YField) -> (f64, f64) {
        extent(self.records.iter().map(|record| record.y_value(field)))
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}
