//! Driver-level workflows over a single route.

use rand::Rng;

use crate::error::{Error, Result};
use crate::evaluation::{OptimizationReport, RouteSummary};
use crate::models::{Route, Stop};
use crate::orders::{GeneratorConfig, OrderGenerator, TrackingNumber};

/// Owns a route and runs the courier-facing operations on it.
///
/// Adding or deleting a stop re-optimizes the whole route afterwards, so the
/// visiting order always reflects the latest set of stops. Operations other
/// than [`Dispatcher::generate`] fail with [`Error::EmptyRoute`] until a
/// route exists.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::dispatch::Dispatcher;
/// use u_dispatch::orders::GeneratorConfig;
///
/// let mut rng = StdRng::seed_from_u64(5);
/// let mut dispatcher = Dispatcher::new(GeneratorConfig::default().with_stops(20)).unwrap();
/// assert!(dispatcher.summary().is_err());
///
/// dispatcher.generate(&mut rng);
/// let report = dispatcher.optimize().unwrap();
/// assert!(report.after <= report.before);
///
/// dispatcher.add_stop("10010999999", &mut rng).unwrap();
/// assert_eq!(dispatcher.route().len(), 21);
/// assert!(dispatcher.delete("10010999999").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    generator: OrderGenerator,
    route: Route,
}

impl Dispatcher {
    /// Creates a dispatcher with an empty route.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Ok(Self {
            generator: OrderGenerator::new(config)?,
            route: Route::new(),
        })
    }

    /// Creates a dispatcher around an existing route.
    pub fn with_route(config: GeneratorConfig, route: Route) -> Result<Self> {
        Ok(Self {
            generator: OrderGenerator::new(config)?,
            route,
        })
    }

    /// The current route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Consumes the dispatcher, returning its route.
    pub fn into_route(self) -> Route {
        self.route
    }

    /// Fails with [`Error::EmptyRoute`] if there are no stops.
    pub fn require_route(&self) -> Result<&Route> {
        if self.route.is_empty() {
            Err(Error::EmptyRoute)
        } else {
            Ok(&self.route)
        }
    }

    /// Replaces the current route with freshly generated orders.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> &Route {
        self.route = self.generator.generate(rng);
        &self.route
    }

    /// Stop count and mileage of the current order.
    pub fn summary(&self) -> Result<RouteSummary> {
        self.require_route().map(RouteSummary::of)
    }

    /// Re-sequences the route and reports the change in distance.
    pub fn optimize(&mut self) -> Result<OptimizationReport> {
        self.require_route()?;
        Ok(self.route.optimize_with_report())
    }

    /// Adds a package at a random address, then re-optimizes.
    ///
    /// The new stop's sequence number is the route size after adding it.
    pub fn add_stop<R: Rng>(&mut self, tracking: &str, rng: &mut R) -> Result<Stop> {
        self.require_route()?;
        let tracking = TrackingNumber::parse(tracking)?;
        let sequence_number = u32::try_from(self.route.len() + 1).unwrap_or(u32::MAX);
        let stop = self.generator.random_stop(rng, tracking, sequence_number);
        log::info!(
            "dispatch.add: id={} at=({}, {}) seq={}",
            stop.id(),
            stop.x(),
            stop.y(),
            sequence_number
        );
        self.route.append(stop.clone());
        self.route.optimize();
        Ok(stop)
    }

    /// Looks up a package by tracking number.
    pub fn find(&self, tracking: &str) -> Result<Option<&Stop>> {
        self.require_route()?;
        let tracking = TrackingNumber::parse(tracking)?;
        Ok(self.route.find_by_id(tracking.as_str()))
    }

    /// Removes a package and re-optimizes. Returns `false` if it was not on
    /// the route.
    pub fn delete(&mut self, tracking: &str) -> Result<bool> {
        self.require_route()?;
        let tracking = TrackingNumber::parse(tracking)?;
        let removed = self.route.remove_by_id(tracking.as_str());
        if removed {
            self.route.optimize();
            log::info!(
                "dispatch.delete: id={} remaining={}",
                tracking,
                self.route.len()
            );
        } else {
            log::debug!("dispatch.delete: id={} not found", tracking);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(stops: usize) -> (Dispatcher, StdRng) {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut d = Dispatcher::new(GeneratorConfig::default().with_stops(stops)).expect("valid");
        d.generate(&mut rng);
        (d, rng)
    }

    fn abc() -> Route {
        [
            Stop::new("10010000001", 10, 0, 1),
            Stop::new("10010000002", 0, 10, 2),
            Stop::new("10010000003", 5, 5, 3),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_route_rejected() {
        let mut d = Dispatcher::new(GeneratorConfig::default()).expect("valid");
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(d.summary(), Err(Error::EmptyRoute)));
        assert!(matches!(d.optimize(), Err(Error::EmptyRoute)));
        assert!(matches!(d.find("10010000001"), Err(Error::EmptyRoute)));
        assert!(matches!(d.delete("10010000001"), Err(Error::EmptyRoute)));
        assert!(matches!(
            d.add_stop("10010000001", &mut rng),
            Err(Error::EmptyRoute)
        ));
    }

    #[test]
    fn test_generate_replaces_route() {
        let (mut d, mut rng) = seeded(15);
        assert_eq!(d.route().len(), 15);
        d.generate(&mut rng);
        assert_eq!(d.route().len(), 15);
        assert_eq!(d.summary().expect("route").stops, 15);
    }

    #[test]
    fn test_optimize_reports_distances() {
        let mut d = Dispatcher::with_route(GeneratorConfig::default(), abc()).expect("valid");
        let report = d.optimize().expect("route");
        assert!((report.after - d.route().total_distance()).abs() < 1e-10);
        assert_eq!(d.route().first().map(Stop::id), Some("10010000003"));
    }

    #[test]
    fn test_add_stop_reoptimizes() {
        let (mut d, mut rng) = seeded(30);
        let placed = d.add_stop(" 10010555555 ", &mut rng).expect("added");
        assert_eq!(placed.id(), "10010555555");
        assert_eq!(placed.sequence_number(), 31);
        assert_eq!(d.route().len(), 31);
        assert!(d.route().iter().any(|s| s == &placed));

        let mut expected = d.route().clone();
        expected.optimize();
        assert_eq!(d.route(), &expected);
    }

    #[test]
    fn test_add_stop_invalid_tracking() {
        let (mut d, mut rng) = seeded(5);
        let err = d.add_stop("12345", &mut rng).expect_err("invalid");
        assert!(matches!(err, Error::InvalidTrackingNumber(_)));
        assert_eq!(d.route().len(), 5);
    }

    #[test]
    fn test_find_and_delete() {
        let mut d = Dispatcher::with_route(GeneratorConfig::default(), abc()).expect("valid");
        let found = d.find("10010000002").expect("valid").expect("present");
        assert_eq!((found.x(), found.y()), (0, 10));

        assert!(d.delete("10010000002").expect("valid"));
        assert!(d.find("10010000002").expect("valid").is_none());
        assert_eq!(d.route().len(), 2);
        assert_eq!(d.route().ids(), vec!["10010000003", "10010000001"]);
    }

    #[test]
    fn test_delete_absent() {
        let mut d = Dispatcher::with_route(GeneratorConfig::default(), abc()).expect("valid");
        assert!(!d.delete("10010999999").expect("valid"));
        assert_eq!(d.route(), &abc());
    }

    #[test]
    fn test_delete_invalid_tracking() {
        let mut d = Dispatcher::with_route(GeneratorConfig::default(), abc()).expect("valid");
        assert!(matches!(
            d.delete("not-a-number"),
            Err(Error::InvalidTrackingNumber(_))
        ));
    }
}
