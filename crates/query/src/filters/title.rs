//! Filter on an exact movie title.

use crate::traits::MovieFilter;
use data_loader::Movie;

/// Keeps movies whose title is exactly `title` (case-sensitive).
pub struct TitleFilter {
    title: String,
}

impl TitleFilter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl MovieFilter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.title == self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            directed_by: "Sam Raimi".to_string(),
            rating: 7.0,
            certificate: "12".to_string(),
            release_date: 2002,
        }
    }

    #[test]
    fn test_exact_match_only() {
        let movies = [movie("Spider-Man"), movie("Spider-Man 2"), movie("spider-man")];

        let filter = TitleFilter::new("Spider-Man");
        let filtered = filter.apply(movies.iter().collect());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Spider-Man");
    }
}
