//! HTTP request handlers for the movie endpoints.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::{IntoResponse, Response},
};
use query::parse_rating;

use crate::error::ApiError;
use crate::response::MovieResponse;
use crate::state::AppState;

/// GET /api/movies
pub async fn get_all_movies(State(state): State<AppState>) -> Response {
    MovieResponse::Many(state.query.fetch_all().iter().collect()).into_response()
}

/// GET /api/movies/title/:title
pub async fn get_movie_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Response {
    MovieResponse::single(state.query.fetch_by_title(&title), || {
        format!("No movies exist by the title: {title}")
    })
    .into_response()
}

/// GET /api/movies/director/:director
pub async fn get_movies_by_director(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> Response {
    MovieResponse::list(state.query.fetch_by_director(&director), || {
        format!("No movies exist by the director: {director}")
    })
    .into_response()
}

/// GET /api/movies/rating/:method/:rating
///
/// Only the method is validated. A rating that is not a number matches no
/// movies and gets the soft not-found body with the raw value echoed.
pub async fn get_movies_by_rating(
    State(state): State<AppState>,
    Path((method, rating)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let movies = state.query.fetch_by_rating(&method, parse_rating(&rating))?;
    Ok(MovieResponse::list(movies, || {
        format!("No movies exist with a rating {method} {rating}")
    })
    .into_response())
}

/// Fallback for every unknown path
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
