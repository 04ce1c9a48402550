//! Straight-line distance on the integer grid.

use crate::models::Stop;

/// Euclidean distance between two stops.
///
/// Differences are taken in `f64`, so coordinates near the `i32` limits do
/// not overflow.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
/// use u_dispatch::distance::euclidean;
///
/// let a = Stop::new("a", 0, 0, 1);
/// let b = Stop::new("b", 6, 8, 2);
/// assert!((euclidean(&a, &b) - 10.0).abs() < 1e-10);
/// ```
pub fn euclidean(a: &Stop, b: &Stop) -> f64 {
    let dx = f64::from(a.x()) - f64::from(b.x());
    let dy = f64::from(a.y()) - f64::from(b.y());
    (dx * dx + dy * dy).sqrt()
}

/// Sum of distances between consecutive stops.
///
/// Returns `0.0` for sequences of fewer than two stops.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
/// use u_dispatch::distance::path_length;
///
/// let stops = vec![
///     Stop::new("a", 0, 0, 1),
///     Stop::new("b", 3, 4, 2),
///     Stop::new("c", 3, 0, 3),
/// ];
/// assert!((path_length(&stops) - 9.0).abs() < 1e-10);
/// assert_eq!(path_length(&stops[..1]), 0.0);
/// ```
pub fn path_length(stops: &[Stop]) -> f64 {
    stops.windows(2).map(|w| euclidean(&w[0], &w[1])).sum()
}

/// Returns the index of the candidate closest to `from`.
///
/// Candidates are scanned left to right and only a strictly smaller distance
/// replaces the current best, so the earliest candidate wins ties.
/// Returns `None` if `candidates` is empty.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
/// use u_dispatch::distance::nearest_index;
///
/// let origin = Stop::warehouse();
/// let candidates = vec![
///     Stop::new("far", 10, 0, 1),
///     Stop::new("tie-a", 0, 5, 2),
///     Stop::new("tie-b", 5, 0, 3),
/// ];
/// assert_eq!(nearest_index(&origin, &candidates), Some(1));
/// assert_eq!(nearest_index(&origin, &[]), None);
/// ```
pub fn nearest_index(from: &Stop, candidates: &[Stop]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let d = euclidean(from, candidate);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
