//! The FilterPipeline chains multiple filters.
//!
//! A movie is kept only if every filter in the pipeline keeps it.

use crate::traits::MovieFilter;
use data_loader::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DirectorFilter::new("Christopher Nolan"))
///     .add_filter(RatingFilter::new(RatingMethod::MoreThanOrEqual, 8.0));
///
/// let movies = query.select(&pipeline);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn MovieFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl MovieFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Order of the input is preserved; an empty pipeline returns the input
    /// unchanged.
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
