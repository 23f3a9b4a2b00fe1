//! Error types for flight searches.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single row could not become a [`FlightRecord`](crate::FlightRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Row did not split into the nine positional fields.
    #[error("expected 9 fields, found {found}")]
    FieldCount { found: usize },

    /// A numeric column held something other than an integer.
    #[error("field '{field}' is not an integer: '{value}'")]
    NotAnInteger { field: &'static str, value: String },
}

/// Errors that can occur while searching a flight data file.
#[derive(Debug, Error)]
pub enum SearchError {
    // === Data source ===
    /// The configured data file does not exist.
    #[error("flight data file not found: {path}")]
    DataSourceNotFound { path: PathBuf },

    /// The data file exists but could not be read.
    #[error("failed to read flight data {path}: {source}")]
    DataSourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The quoted-field reader rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Rows ===
    /// A row was malformed and the search was aborted.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        line: usize,
        #[source]
        reason: RecordError,
    },

    // === Configuration ===
    /// A search configuration file could not be loaded.
    #[error("invalid search config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    /// Map an I/O error on `path`, keeping "not found" distinct.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::DataSourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::DataSourceRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
