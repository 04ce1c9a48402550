//! Route summaries and before/after optimization reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Route;

/// Grid units per mile.
pub const MILEAGE_SCALE: f64 = 100.0;

/// Stop count and total distance of a route at one point in time.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Route, Stop};
/// use u_dispatch::evaluation::RouteSummary;
///
/// let mut route = Route::new();
/// route.append(Stop::new("a", 0, 0, 1));
/// route.append(Stop::new("b", 300, 400, 2));
///
/// let summary = RouteSummary::of(&route);
/// assert_eq!(summary.stops, 2);
/// assert!((summary.mileage() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Number of stops on the route.
    pub stops: usize,
    /// Total distance in grid units.
    pub distance: f64,
}

impl RouteSummary {
    /// Summarizes the route in its current order.
    pub fn of(route: &Route) -> Self {
        Self {
            stops: route.len(),
            distance: route.total_distance(),
        }
    }

    /// Total distance in miles.
    pub fn mileage(&self) -> f64 {
        self.distance / MILEAGE_SCALE
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total stops: {}, mileage: {:.2} miles",
            self.stops,
            self.mileage()
        )
    }
}

/// Route distance before and after an optimization pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Distance before optimizing, in grid units.
    pub before: f64,
    /// Distance after optimizing, in grid units.
    pub after: f64,
}

impl OptimizationReport {
    /// Creates a report from two distances.
    pub fn new(before: f64, after: f64) -> Self {
        Self { before, after }
    }

    /// Distance saved. Negative if the heuristic made the route longer.
    pub fn saved(&self) -> f64 {
        self.before - self.after
    }

    /// Mileage before optimizing.
    pub fn mileage_before(&self) -> f64 {
        self.before / MILEAGE_SCALE
    }

    /// Mileage after optimizing.
    pub fn mileage_after(&self) -> f64 {
        self.after / MILEAGE_SCALE
    }

    /// Mileage saved.
    pub fn mileage_saved(&self) -> f64 {
        self.saved() / MILEAGE_SCALE
    }
}

impl fmt::Display for OptimizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mileage: {:.2} -> {:.2} miles (saved {:.2} miles)",
            self.mileage_before(),
            self.mileage_after(),
            self.mileage_saved()
        )
    }
}
