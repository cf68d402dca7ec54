//! # Query Engine
//!
//! `MovieQuery` answers the four lookups the API exposes:
//! 1. every movie
//! 2. one movie by exact title
//! 3. every movie by a director
//! 4. every movie whose rating compares to a value with a RatingMethod
//!
//! All of them are read-only walks over the shared `Dataset`. Results keep
//! dataset order and borrow from the dataset; empty results are normal
//! values, only an unknown rating method is an error.

use std::sync::Arc;

use data_loader::{Dataset, Movie};
use tracing::debug;

use crate::error::Result;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::RatingFilter;
use crate::rating::RatingMethod;
use crate::traits::MovieFilter;

/// Read-only query interface over the movie dataset.
///
/// Cloning is cheap: clones share the same `Arc<Dataset>`.
#[derive(Debug, Clone)]
pub struct MovieQuery {
    dataset: Arc<Dataset>,
}

impl MovieQuery {
    /// Create a query engine over a loaded dataset
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// The dataset this engine reads from
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Every movie, in dataset order
    pub fn fetch_all(&self) -> &[Movie] {
        self.dataset.movies()
    }

    /// First movie whose title is exactly `title`
    ///
    /// Returns `None` when nothing matches.
    pub fn fetch_by_title(&self, title: &str) -> Option<&Movie> {
        let movie = self.dataset.get_by_title(title);
        debug!("Title lookup {:?}: found={}", title, movie.is_some());
        movie
    }

    /// Every movie directed by `director`, in dataset order
    pub fn fetch_by_director(&self, director: &str) -> Vec<&Movie> {
        let movies = self.dataset.get_by_director(director);
        debug!("Director lookup {:?}: {} movies", director, movies.len());
        movies
    }

    /// Every movie whose rating satisfies `movie.rating <method> rating`
    ///
    /// # Errors
    /// `QueryError::InvalidMethod` when `method` is not one of
    /// `lessThanOrEqual`, `moreThanOrEqual` or `equalTo`.
    pub fn fetch_by_rating(&self, method: &str, rating: f64) -> Result<Vec<&Movie>> {
        let method: RatingMethod = method.parse()?;
        Ok(self.fetch_by_rating_method(method, rating))
    }

    /// Typed form of `fetch_by_rating`, for an already validated method
    pub fn fetch_by_rating_method(&self, method: RatingMethod, rating: f64) -> Vec<&Movie> {
        let filter = RatingFilter::new(method, rating);
        let movies = filter.apply(self.fetch_all().iter().collect());
        debug!("Rating lookup {} {}: {} movies", method, rating, movies.len());
        movies
    }

    /// Run a filter pipeline over the whole dataset
    pub fn select(&self, pipeline: &FilterPipeline) -> Vec<&Movie> {
        pipeline.apply(self.fetch_all().iter().collect())
    }
}
