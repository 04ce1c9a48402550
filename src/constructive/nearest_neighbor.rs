//! Nearest-neighbor re-sequencing.
//!
//! Orders stops greedily: starting from an origin (the warehouse), always
//! visit the nearest stop not yet placed.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of stops.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. It has no
//! improvement pass and can be far from the optimal tour, but it is fast and
//! deterministic.

use crate::distance::nearest_index;
use crate::models::Stop;

/// Orders `stops` by repeatedly moving to the nearest remaining stop.
///
/// The first stop is the one nearest to `origin`; `origin` itself is not
/// part of the result. Ties go to whichever stop comes first in the input
/// order. The result is a permutation of the input.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
/// use u_dispatch::constructive::nearest_neighbor;
///
/// let stops = vec![
///     Stop::new("far", 3, 0, 1),
///     Stop::new("near", 1, 0, 2),
///     Stop::new("mid", 2, 0, 3),
/// ];
/// let ordered = nearest_neighbor(stops, &Stop::warehouse());
/// let ids: Vec<&str> = ordered.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, ["near", "mid", "far"]);
/// ```
pub fn nearest_neighbor(stops: Vec<Stop>, origin: &Stop) -> Vec<Stop> {
    let mut remaining = stops;
    let mut ordered = Vec::with_capacity(remaining.len());

    let mut next = nearest_index(origin, &remaining);
    while let Some(idx) = next {
        // `remove` keeps the scan order of the rest stable for tie-breaking.
        let stop = remaining.remove(idx);
        next = nearest_index(&stop, &remaining);
        ordered.push(stop);
    }

    log::debug!(
        "nearest_neighbor: placed={} origin=({}, {})",
        ordered.len(),
        origin.x(),
        origin.y()
    );
    ordered
}
