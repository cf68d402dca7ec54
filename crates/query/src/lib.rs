//! Query engine over the in-memory movie dataset.
//!
//! This crate provides:
//! - `MovieQuery`, the four lookups served by the API
//! - `RatingMethod` and `parse_rating` for turning request strings into
//!   typed, numeric comparisons
//! - the `MovieFilter` trait, its implementations and `FilterPipeline` for
//!   combining them
//!
//! ## Example Usage
//! ```ignore
//! use query::{MovieQuery, FilterPipeline, RatingMethod};
//! use query::filters::*;
//!
//! let query = MovieQuery::new(dataset.clone());
//!
//! let movie = query.fetch_by_title("Inception");
//! let good = query.fetch_by_rating("moreThanOrEqual", 8.0)?;
//!
//! // Combine filters
//! let pipeline = FilterPipeline::new()
//!     .add_filter(DirectorFilter::new("Christopher Nolan"))
//!     .add_filter(RatingFilter::new(RatingMethod::MoreThanOrEqual, 8.0));
//! let movies = query.select(&pipeline);
//! ```

pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod rating;
pub mod traits;

// Re-export main types
pub use engine::MovieQuery;
pub use error::{QueryError, Result};
pub use filter_pipeline::FilterPipeline;
pub use rating::{parse_rating, RatingMethod};
pub use traits::MovieFilter;
