use thiserror::Error;

/// Convenience result type for the fallible edges of the crate (ingestion, configuration,
/// table construction). Processing itself is total and never fails.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by ingestion, configuration and table construction.
#[derive(Debug, Error)]
pub enum TableError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON document (configuration files).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not conform to the provided schema (missing required fields/columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// Table options or column descriptors are inconsistent.
    #[error("invalid table configuration: {message}")]
    InvalidConfig { message: String },
}
