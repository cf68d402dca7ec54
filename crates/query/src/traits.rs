//! Core traits for the filtering pipeline.
//!
//! This module defines the MovieFilter trait that allows composable,
//! extensible filters to be applied to the dataset.

use data_loader::Movie;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// - `Send + Sync` lets one pipeline be shared between request handlers
/// - Filters borrow the movies, nothing is cloned while filtering
pub trait MovieFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single movie passes this filter
    fn matches(&self, movie: &Movie) -> bool;

    /// Apply this filter to a set of movies, keeping their order
    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect()
    }
}
