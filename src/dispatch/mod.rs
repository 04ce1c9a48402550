//! Courier-facing workflows built on the route core.
//!
//! - [`Dispatcher`] — single-owner session: generate, summarize, optimize,
//!   add and delete packages with automatic re-optimization
//! - [`SharedRoute`] — mutex-guarded handle for routes shared across threads

mod session;
mod shared;

pub use session::Dispatcher;
pub use shared::SharedRoute;
