//! Ordered delivery route.

use std::slice;

use crate::constructive::nearest_neighbor;
use crate::distance::path_length;
use crate::evaluation::OptimizationReport;

use super::Stop;

/// An ordered sequence of stops; storage order is visiting order.
///
/// Identifiers are trusted to be unique but this is not enforced. When two
/// stops share an identifier, lookups and removals act on the first one in
/// the current order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Stop};
///
/// let mut route = Route::new();
/// route.append(Stop::new("A", 10, 0, 1));
/// route.append(Stop::new("B", 0, 10, 2));
/// route.append(Stop::new("C", 5, 5, 3));
/// assert_eq!(route.len(), 3);
///
/// route.optimize();
/// let ids: Vec<&str> = route.iter().map(|s| s.id()).collect();
/// assert_eq!(ids, ["C", "A", "B"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Appends a stop as the new last element.
    pub fn append(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Returns the first stop with the given identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id() == id)
    }

    /// Returns the current visiting position of the first stop with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.id() == id)
    }

    /// Removes the first stop with the given identifier.
    ///
    /// The remaining stops keep their relative order. Returns `false`, leaving
    /// the route untouched, if no stop matches.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.position_of(id) {
            Some(idx) => {
                self.stops.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sum of Euclidean distances between consecutive stops.
    ///
    /// The depot is not part of the sum. Empty and single-stop routes have
    /// distance `0.0`.
    pub fn total_distance(&self) -> f64 {
        path_length(&self.stops)
    }

    /// Re-sequences the route with the nearest-neighbor heuristic, starting
    /// from the warehouse at the origin.
    ///
    /// The new order is built separately and swapped in once complete.
    /// Sequence numbers are left as they were.
    pub fn optimize(&mut self) {
        if self.stops.is_empty() {
            return;
        }
        let working = std::mem::take(&mut self.stops);
        self.stops = nearest_neighbor(working, &Stop::warehouse());
    }

    /// Optimizes the route and reports the distance before and after.
    pub fn optimize_with_report(&mut self) -> OptimizationReport {
        let before = self.total_distance();
        self.optimize();
        let report = OptimizationReport::new(before, self.total_distance());
        log::info!(
            "route.optimize: stops={} before={:.2} after={:.2}",
            self.len(),
            report.before,
            report.after
        );
        report
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The first stop in visiting order.
    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// The last stop in visiting order.
    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Returns the stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Iterates over the stops from first to last.
    pub fn iter(&self) -> slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    /// Returns the stop identifiers in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(Stop::id).collect()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Stop;
    type IntoIter = slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

impl FromIterator<Stop> for Route {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        Self {
            stops: iter.into_iter().collect(),
        }
    }
}

impl Extend<Stop> for Route {
    fn extend<I: IntoIterator<Item = Stop>>(&mut self, iter: I) {
        self.stops.extend(iter);
    }
}
