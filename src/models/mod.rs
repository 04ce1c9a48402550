//! Domain model types for delivery routing.
//!
//! A [`Stop`] is one delivery point; a [`Route`] is the ordered sequence of
//! stops a courier visits.

mod route;
mod stop;

pub use route::Route;
pub use stop::{Stop, WAREHOUSE_ID};
