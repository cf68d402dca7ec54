//! Error types for the data-loader crate.
//!
//! Every variant is fatal: a dataset that fails to load stops the process
//! at startup, there is no per-request recovery.

use thiserror::Error;

/// Errors that can occur while loading the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not a valid JSON list of movies
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A movie record had an invalid value
    #[error("Invalid value for {field} in movie #{index}: {value}")]
    InvalidValue {
        field: String,
        index: usize,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
