//! Order intake: tracking number validation and random order generation.

mod generator;
mod tracking;

pub use generator::{GeneratorConfig, OrderGenerator};
pub use tracking::{TrackingNumber, SUFFIX_DIGITS, SUFFIX_SPACE, TRACKING_PREFIX};
