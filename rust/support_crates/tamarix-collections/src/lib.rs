//! Generic ordered-collection utilities shared by the tamarix crates.

pub mod sorted_search;

pub use sorted_search::{locate_eq, locate_ge, locate_le};
