//! Filter on a movie's rating.
//!
//! Compares each movie's rating against a fixed value with one of the
//! accepted RatingMethods.

use crate::rating::RatingMethod;
use crate::traits::MovieFilter;
use data_loader::Movie;

/// Keeps movies where `movie.rating <method> value` holds.
pub struct RatingFilter {
    method: RatingMethod,
    value: f64,
}

impl RatingFilter {
    /// Create a new RatingFilter.
    ///
    /// # Arguments
    /// * `method` - Comparison to apply
    /// * `value` - Rating to compare each movie against
    pub fn new(method: RatingMethod, value: f64) -> Self {
        Self { method, value }
    }
}

impl MovieFilter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.method.compare(movie.rating, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_movies() -> Vec<Movie> {
        [("Low", 3.0), ("Mid", 7.0), ("Nine", 9.0), ("Ten", 10.0)]
            .into_iter()
            .map(|(title, rating)| Movie {
                title: title.to_string(),
                directed_by: "Various".to_string(),
                rating,
                certificate: "PG".to_string(),
                release_date: 2000,
            })
            .collect()
    }

    fn titles(movies: Vec<&Movie>) -> Vec<&str> {
        movies.into_iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_more_than_or_equal() {
        let movies = create_test_movies();

        let filter = RatingFilter::new(RatingMethod::MoreThanOrEqual, 9.0);
        assert_eq!(titles(filter.apply(movies.iter().collect())), vec!["Nine", "Ten"]);
    }

    #[test]
    fn test_less_than_or_equal() {
        let movies = create_test_movies();

        let filter = RatingFilter::new(RatingMethod::LessThanOrEqual, 7.0);
        assert_eq!(titles(filter.apply(movies.iter().collect())), vec!["Low", "Mid"]);
    }

    #[test]
    fn test_equal_to() {
        let movies = create_test_movies();

        let filter = RatingFilter::new(RatingMethod::EqualTo, 10.0);
        assert_eq!(titles(filter.apply(movies.iter().collect())), vec!["Ten"]);

        let filter = RatingFilter::new(RatingMethod::EqualTo, 9.5);
        assert!(filter.apply(movies.iter().collect()).is_empty());
    }
}
