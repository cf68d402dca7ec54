//! Error types for the query crate.

use crate::rating::RatingMethod;
use thiserror::Error;

/// Invalid arguments passed to a query.
///
/// An empty result is never an error. The rating method whitelist is the
/// only input the engine rejects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Rating method outside the accepted set
    #[error("{method} is not one of the accepted methods: [{}]", RatingMethod::accepted_list())]
    InvalidMethod { method: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
