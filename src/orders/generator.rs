//! Random order generation.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tracking::{TrackingNumber, SUFFIX_SPACE};
use crate::error::{Error, Result};
use crate::models::{Route, Stop};

/// Settings for [`OrderGenerator`].
///
/// Defaults simulate a day's work in a city: 70 to 250 stops on a
/// 1000 × 1000 grid.
///
/// # Examples
///
/// ```
/// use u_dispatch::orders::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_stop_range(5, 10).with_grid_size(50);
/// assert!(config.validate().is_ok());
/// assert!(GeneratorConfig::default().with_stop_range(10, 5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fewest stops in a generated route.
    pub min_stops: usize,
    /// Most stops in a generated route.
    pub max_stops: usize,
    /// Coordinates are drawn from `[0, grid_size)` on both axes.
    pub grid_size: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_stops: 70,
            max_stops: 250,
            grid_size: 1000,
        }
    }
}

impl GeneratorConfig {
    /// Sets the inclusive range of stop counts.
    pub fn with_stop_range(mut self, min_stops: usize, max_stops: usize) -> Self {
        self.min_stops = min_stops;
        self.max_stops = max_stops;
        self
    }

    /// Fixes the number of generated stops.
    pub fn with_stops(self, stops: usize) -> Self {
        self.with_stop_range(stops, stops)
    }

    /// Sets the coordinate grid size.
    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Checks that the settings can produce a route.
    pub fn validate(&self) -> Result<()> {
        if self.min_stops > self.max_stops {
            return Err(Error::InvalidConfig(format!(
                "min_stops ({}) exceeds max_stops ({})",
                self.min_stops, self.max_stops
            )));
        }
        if self.grid_size <= 0 {
            return Err(Error::InvalidConfig(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.max_stops > SUFFIX_SPACE as usize {
            return Err(Error::InvalidConfig(format!(
                "max_stops ({}) exceeds the {} available tracking numbers",
                self.max_stops, SUFFIX_SPACE
            )));
        }
        Ok(())
    }
}

/// Generates routes of random orders with unique tracking numbers.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::orders::{GeneratorConfig, OrderGenerator};
///
/// let generator = OrderGenerator::new(GeneratorConfig::default().with_stops(12)).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let route = generator.generate(&mut rng);
/// assert_eq!(route.len(), 12);
/// assert_eq!(route.first().unwrap().sequence_number(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OrderGenerator {
    config: GeneratorConfig,
}

impl OrderGenerator {
    /// Creates a generator after validating its configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a fresh route.
    ///
    /// Stops are numbered `1..=n` in generation order and tracking numbers
    /// are unique within the route.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Route {
        let count = rng.random_range(self.config.min_stops..=self.config.max_stops);
        let mut used = HashSet::with_capacity(count);
        let mut route = Route::new();

        for serial in 1..=count {
            let suffix = loop {
                let candidate = rng.random_range(0..SUFFIX_SPACE);
                if used.insert(candidate) {
                    break candidate;
                }
            };
            let Some(tracking) = TrackingNumber::from_suffix(suffix) else {
                continue;
            };
            route.append(self.random_stop(rng, tracking, serial as u32));
        }

        log::info!(
            "orders.generate: stops={} grid={}",
            route.len(),
            self.config.grid_size
        );
        route
    }

    /// Creates a stop at random coordinates inside the grid.
    pub fn random_stop<R: Rng>(
        &self,
        rng: &mut R,
        tracking: TrackingNumber,
        sequence_number: u32,
    ) -> Stop {
        let x = rng.random_range(0..self.config.grid_size);
        let y = rng.random_range(0..self.config.grid_size);
        Stop::new(tracking.into_string(), x, y, sequence_number)
    }
}
