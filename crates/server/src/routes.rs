//! Route table for the API.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/movies", get(handlers::get_all_movies))
        .route("/api/movies/title/:title", get(handlers::get_movie_by_title))
        .route(
            "/api/movies/director/:director",
            get(handlers::get_movies_by_director),
        )
        .route(
            "/api/movies/rating/:method/:rating",
            get(handlers::get_movies_by_rating),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
