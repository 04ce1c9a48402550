//! Error types emitted by drivers built on the route core.
//!
//! Core route operations never fail: missing identifiers are reported as
//! `None`/`false` and empty routes are valid input everywhere.

use thiserror::Error;

/// Errors emitted by order handling, export and dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// The tracking number does not match the `10010` + six digits format.
    #[error("invalid tracking number {0:?}: expected 10010 followed by 6 digits")]
    InvalidTrackingNumber(String),
    /// Generator settings are inconsistent.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
    /// The operation needs a route with at least one stop.
    #[error("no delivery route found; generate one first")]
    EmptyRoute,
    /// Writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
