//! Loading table data from files.
//!
//! Tables usually receive their records from the embedding page, but the same records can be
//! read from disk:
//!
//! - [`csv`]: headered CSV, parsed against a [`crate::types::Schema`]
//! - [`json`]: an array of objects, a single object, or NDJSON; either against a schema or with
//!   the schema inferred from the records
//!
//! [`ingest_from_path`] picks the format from the file extension.

pub mod csv;
pub mod json;

use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{DataSet, Schema};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values.
    Csv,
    /// JSON array-of-objects or NDJSON.
    Json,
}

impl IngestionFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }

    /// Format of `path`, judged by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Read a CSV or JSON file into a [`DataSet`] shaped by `schema`.
///
/// ```no_run
/// use table_pipeline::ingestion::ingest_from_path;
/// use table_pipeline::types::{DataType, Field, Schema};
///
/// # fn main() -> Result<(), table_pipeline::TableError> {
/// let schema = Schema::new(vec![
///     Field::new("id", DataType::Int64),
///     Field::new("name", DataType::Utf8),
/// ]);
/// let ds = ingest_from_path("people.csv", &schema)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, schema: &Schema) -> TableResult<DataSet> {
    let path = path.as_ref();
    match IngestionFormat::from_path(path) {
        Some(IngestionFormat::Csv) => csv::ingest_csv_from_path(path, schema),
        Some(IngestionFormat::Json) => json::ingest_json_from_path(path, schema),
        None => Err(TableError::SchemaMismatch {
            message: format!(
                "cannot infer input format from extension of '{}'",
                path.display()
            ),
        }),
    }
}
