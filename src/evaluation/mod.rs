//! Route metrics reported to drivers.
//!
//! Distances are in grid units; mileage divides by [`MILEAGE_SCALE`].

mod summary;

pub use summary::{OptimizationReport, RouteSummary, MILEAGE_SCALE};
