//! Dataset building and indexing logic.
//!
//! Turns the parsed movie list into a `Dataset`:
//! - keep the movies in file order (the primary store)
//! - build the title and director indices
//! - validate every record before the dataset is handed out

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info, warn};

impl Dataset {
    /// Load the movie dataset from a JSON file
    ///
    /// This is the main entry point for loading data. Any failure here is
    /// meant to abort startup.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {}", path.display());

        let movies = parser::parse_movies(path)?;
        if movies.is_empty() {
            warn!("{} contains no movies, every lookup will be empty", path.display());
        }

        let dataset = Self::from_movies(movies)?;

        info!(
            "Loaded {} movies by {} directors",
            dataset.len(),
            dataset.directors.len()
        );
        Ok(dataset)
    }

    /// Build a dataset from already-parsed movies
    ///
    /// Validates the records first, then builds the indices.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        validate(&movies)?;

        let mut dataset = Dataset {
            movies,
            ..Default::default()
        };
        dataset.build_indices();
        Ok(dataset)
    }

    /// Build the title and director indices over `self.movies`
    fn build_indices(&mut self) {
        for (pos, movie) in self.movies.iter().enumerate() {
            // First occurrence wins for title lookups
            if let Some(&first) = self.title_index.get(&movie.title) {
                warn!(
                    "Duplicate title {:?} at position {} (first seen at {}), keeping the first",
                    movie.title, pos, first
                );
            } else {
                self.title_index.insert(movie.title.clone(), pos);
            }

            let positions = self
                .director_index
                .entry(movie.directed_by.clone())
                .or_insert_with(Vec::new);
            if positions.is_empty() {
                self.directors.push(movie.directed_by.clone());
            }
            positions.push(pos);
        }

        debug!(
            "Built indices: {} titles, {} directors",
            self.title_index.len(),
            self.director_index.len()
        );
    }
}

/// Validate movie records
///
/// Ratings must be finite numbers. Text fields are passed through as they
/// are, blank ones included.
fn validate(movies: &[Movie]) -> Result<()> {
    for (index, movie) in movies.iter().enumerate() {
        if !movie.rating.is_finite() {
            return Err(DataLoadError::InvalidValue {
                field: "rating".to_string(),
                index,
                value: movie.rating.to_string(),
            });
        }
    }
    Ok(())
}
