//! Parser for the movie dataset file.
//!
//! The dataset is a JSON array of movie objects:
//!
//! ```json
//! [
//!   {
//!     "title": "Lord of the Rings: The Two Towers",
//!     "directed_by": "Peter Jackson",
//!     "rating": 10,
//!     "certificate": "12",
//!     "release_date": 2002
//!   }
//! ]
//! ```

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse the dataset file at `path`
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_movies_str(&content, &path.display().to_string())
}

/// Parse a JSON dataset held in memory
///
/// `source` names the origin of the text in error messages.
pub fn parse_movies_str(json: &str, source: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(json).map_err(|e| DataLoadError::ParseError {
        file: source.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}
