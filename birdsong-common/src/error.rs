//! Common error types for birdsong

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for birdsong operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across birdsong crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tab-delimited input could not be read
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required column is absent from the header or from the row
    #[error("Missing field '{field}' on line {line}")]
    MissingField { field: String, line: u64 },

    /// Occurrence row whose record identifier has no audio record
    #[error("Occurrence {gbif_id} (line {line}) has no matching audio record")]
    UnmatchedRecord { gbif_id: String, line: u64 },
}
