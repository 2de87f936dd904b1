//! Constructive heuristics for building tours.
//!
//! - [`nearest_neighbor`]: greedy nearest-neighbor tour from a named start city, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_from};
