//! Searching sorted slices and implicit graphs.

pub mod bfs;
pub mod binary;

pub use bfs::{search as breadth_first_search, search_with as breadth_first_search_with};
pub use binary::find as binary_search;
