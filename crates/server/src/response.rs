//! Response shaping for lookup results.
//!
//! Lookups have three outcomes on the wire:
//! - one movie (title lookup) as a JSON object
//! - a list of movies as a JSON array
//! - no match, answered with status 200 and `{"error": "..."}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use data_loader::Movie;
use serde::{Deserialize, Serialize};

/// `{"error": "..."}` body shared by soft not-found answers and real errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Successful answer to a lookup, borrowing from the dataset
#[derive(Debug)]
pub enum MovieResponse<'a> {
    One(&'a Movie),
    Many(Vec<&'a Movie>),
    NoMatch(String),
}

impl<'a> MovieResponse<'a> {
    /// `One` when a movie was found, otherwise `NoMatch` with the given message
    pub fn single(movie: Option<&'a Movie>, no_match: impl FnOnce() -> String) -> Self {
        match movie {
            Some(movie) => MovieResponse::One(movie),
            None => MovieResponse::NoMatch(no_match()),
        }
    }

    /// `Many` for a non-empty list, otherwise `NoMatch` with the given message
    pub fn list(movies: Vec<&'a Movie>, no_match: impl FnOnce() -> String) -> Self {
        if movies.is_empty() {
            MovieResponse::NoMatch(no_match())
        } else {
            MovieResponse::Many(movies)
        }
    }
}

impl IntoResponse for MovieResponse<'_> {
    fn into_response(self) -> Response {
        match self {
            MovieResponse::One(movie) => Json(movie).into_response(),
            MovieResponse::Many(movies) => Json(movies).into_response(),
            MovieResponse::NoMatch(message) => {
                (StatusCode::OK, Json(ErrorBody::new(message))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            title: "Alien".to_string(),
            directed_by: "Ridley Scott".to_string(),
            rating: 8.5,
            certificate: "18".to_string(),
            release_date: 1979,
        }
    }

    #[test]
    fn test_empty_list_is_no_match() {
        let response = MovieResponse::list(Vec::new(), || "nothing".to_string());
        assert!(matches!(response, MovieResponse::NoMatch(ref m) if m == "nothing"));
    }

    #[test]
    fn test_found_movie_is_single() {
        let alien = movie();
        let response = MovieResponse::single(Some(&alien), || unreachable!());
        assert!(matches!(response, MovieResponse::One(m) if m.title == "Alien"));
    }

    #[test]
    fn test_no_match_is_still_ok() {
        let response = MovieResponse::single(None, || "nothing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
