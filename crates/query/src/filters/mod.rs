//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod director;
pub mod rating;
pub mod title;

// Re-export for convenience
pub use director::DirectorFilter;
pub use rating::RatingFilter;
pub use title::TitleFilter;
