//! Server crate for the movie query API.
//!
//! Wires the query engine to HTTP: axum routes and handlers, the mapping
//! from lookup results to responses, and the server configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use response::{ErrorBody, MovieResponse};
pub use routes::create_router;
pub use state::AppState;
