//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_from`] — Greedy nearest-neighbor walk from one start, O(n²)
//! - [`nearest_neighbor_multistart`] — Best nearest-neighbor tour over all starts, O(n³)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_from, nearest_neighbor_multistart};
