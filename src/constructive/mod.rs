//! Constructive heuristics for ordering a route.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor sequencing from a depot, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
