//! Filter on the director of a movie.

use crate::traits::MovieFilter;
use data_loader::Movie;

/// Keeps movies whose `directed_by` is exactly `director`.
///
/// Matching is exact and case-sensitive, like the director index in the
/// data-loader crate.
pub struct DirectorFilter {
    director: String,
}

impl DirectorFilter {
    pub fn new(director: impl Into<String>) -> Self {
        Self {
            director: director.into(),
        }
    }
}

impl MovieFilter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.directed_by == self.director
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, director: &str) -> Movie {
        Movie {
            title: title.to_string(),
            directed_by: director.to_string(),
            rating: 8.0,
            certificate: "15".to_string(),
            release_date: 1999,
        }
    }

    #[test]
    fn test_director_filter_keeps_order() {
        let movies = [
            movie("Fight Club", "David Fincher"),
            movie("Magnolia", "Paul Thomas Anderson"),
            movie("Zodiac", "David Fincher"),
        ];

        let filtered = DirectorFilter::new("David Fincher").apply(movies.iter().collect());

        let titles: Vec<&str> = filtered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Fight Club", "Zodiac"]);
    }

    #[test]
    fn test_no_partial_match() {
        let movies = [movie("Fight Club", "David Fincher")];

        let filtered = DirectorFilter::new("Fincher").apply(movies.iter().collect());
        assert!(filtered.is_empty());
    }
}
