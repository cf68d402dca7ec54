//! Error responses for the API.
//!
//! Only genuine client mistakes are errors here. A lookup that matches no
//! movies is answered with 200 by `response::MovieResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use query::QueryError;
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown rating method or unparseable rating value
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    #[error("No route for {0}")]
    RouteNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("Rejecting request with {}: {}", status, self);

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
