//! # Data Loader Crate
//!
//! This crate loads the static movie dataset and holds it in memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Dataset)
//! - **parser**: Parse the JSON dataset file into Rust structs
//! - **index**: Build the title/director indices and validate records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! // Load the entire dataset, once, at startup
//! let dataset = Dataset::load_from_file(Path::new("data/movies.json"))?;
//!
//! let movie = dataset.get_by_title("Inception").unwrap();
//! let nolan = dataset.get_by_director("Christopher Nolan");
//!
//! println!("{} was directed by {}", movie.title, movie.directed_by);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Dataset, Movie};
