//! # u-dispatch
//!
//! Delivery route maintenance: an ordered sequence of stops with lookup and
//! removal by tracking number, plus greedy nearest-neighbor re-sequencing
//! from a warehouse at the origin.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, Route)
//! - [`distance`] — Euclidean distance, path length, nearest-candidate scan
//! - [`constructive`] — Nearest-neighbor sequencing
//! - [`evaluation`] — Route summaries and optimization reports
//! - [`orders`] — Tracking number validation and random order generation
//! - [`export`] — CSV export
//! - [`dispatch`] — Courier sessions and a thread-safe route handle

pub mod constructive;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod models;
pub mod orders;

pub use error::{Error, Result};
