//! Shared application state handed to every handler.

use std::sync::Arc;

use data_loader::Dataset;
use query::MovieQuery;

/// Cloned into each request by axum; the dataset itself is shared.
#[derive(Debug, Clone)]
pub struct AppState {
    pub query: MovieQuery,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            query: MovieQuery::new(dataset),
        }
    }
}
