//! Euclidean distances between stops.
//!
//! Provides the point-to-point metric, path length over an ordered sequence,
//! and the nearest-candidate scan used by the constructive heuristic.

mod euclidean;

pub use euclidean::{euclidean, nearest_index, path_length};
