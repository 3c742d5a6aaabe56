//! Dataset Error Types
//!
//! Errors raised while loading the source CSV files. Any of these is fatal
//! at start-up: the server must not come up with a partially loaded dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading the happiness or country-code tables
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Source file could not be read
    #[error("Failed to read data file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Source file could not be parsed as CSV with the expected columns
    #[error("Failed to parse data file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
