//! Core domain types for the movie dataset.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Movie`, one immutable record as it appears in the dataset file
//! - `Dataset`, the ordered, read-only collection plus its lookup indices

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the dataset.
///
/// Field names match the JSON dataset file and the HTTP responses, so the
/// struct is serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub directed_by: String,
    /// Numeric score, compared numerically by rating queries
    pub rating: f64,
    /// Age certificate (e.g. "12", "PG"), passed through untouched
    pub certificate: String,
    /// Release year
    pub release_date: u16,
}

// =============================================================================
// Dataset - The In-Memory Store
// =============================================================================

/// The full, ordered sequence of movies and the indices built over it.
///
/// A `Dataset` is built once at startup and never mutated afterwards, so it
/// can be shared behind an `Arc` by every request without locking.
#[derive(Debug, Default)]
pub struct Dataset {
    // Primary data store, in file order
    pub(crate) movies: Vec<Movie>,

    // Secondary indices, values are positions into `movies`
    /// First position of each title
    pub(crate) title_index: HashMap<String, usize>,
    /// Ascending positions of each director's movies
    pub(crate) director_index: HashMap<String, Vec<usize>>,
    /// Distinct directors in order of first appearance
    pub(crate) directors: Vec<String>,
}

impl Dataset {
    /// All movies, in dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Get the first movie with exactly this title
    pub fn get_by_title(&self, title: &str) -> Option<&Movie> {
        self.title_index.get(title).map(|&pos| &self.movies[pos])
    }

    /// Get every movie by this director, in dataset order
    ///
    /// Returns an empty Vec if the director is unknown
    pub fn get_by_director(&self, director: &str) -> Vec<&Movie> {
        self.director_index
            .get(director)
            .map(|positions| positions.iter().map(|&pos| &self.movies[pos]).collect())
            .unwrap_or_default()
    }

    /// Distinct directors, in order of first appearance
    pub fn directors(&self) -> &[String] {
        &self.directors
    }

    /// Number of movies by this director
    pub fn director_count(&self, director: &str) -> usize {
        self.director_index.get(director).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
