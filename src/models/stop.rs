//! Delivery stop type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the warehouse depot every optimized route starts from.
pub const WAREHOUSE_ID: &str = "Warehouse";

/// A single delivery point.
///
/// Stops carry a caller-assigned identifier (a tracking number), integer
/// grid coordinates and a sequence number recorded when the stop was created.
/// The identifier and coordinates never change after construction.
///
/// The sequence number is informational: reordering a route does not
/// renumber its stops, so after optimization it records creation order
/// rather than visiting position.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
///
/// let depot = Stop::warehouse();
/// assert_eq!(depot.x(), 0);
/// assert_eq!(depot.y(), 0);
///
/// let s = Stop::new("10010000042", 3, 4, 1);
/// assert_eq!(s.id(), "10010000042");
/// assert!((depot.distance_to(&s) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stop {
    id: String,
    x: i32,
    y: i32,
    sequence_number: u32,
}

impl Stop {
    /// Creates a new stop.
    ///
    /// Coordinates are expected to be non-negative; this is not checked.
    pub fn new(id: impl Into<String>, x: i32, y: i32, sequence_number: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            sequence_number,
        }
    }

    /// The warehouse depot at the origin.
    pub fn warehouse() -> Self {
        Self::new(WAREHOUSE_ID, 0, 0, 0)
    }

    /// Tracking identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Sequence number assigned at creation.
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// Euclidean distance to another stop.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        crate::distance::euclidean(self, other)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tracking number: {}, address: {}, {}, serial number: {}",
            self.id, self.x, self.y, self.sequence_number
        )
    }
}
