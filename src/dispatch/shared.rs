//! Route handle for multiple callers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::evaluation::{OptimizationReport, RouteSummary};
use crate::models::{Route, Stop};

/// A cloneable, thread-safe handle to one route.
///
/// Every operation holds a single exclusive lock for its whole duration, so
/// callers never observe a half-rebuilt route during [`SharedRoute::optimize`].
/// Reads hand out owned copies rather than references into the route.
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::SharedRoute;
/// use u_dispatch::models::Stop;
///
/// let shared = SharedRoute::new();
/// let writer = shared.clone();
/// std::thread::spawn(move || {
///     writer.append(Stop::new("A", 10, 0, 1));
///     writer.append(Stop::new("B", 1, 1, 2));
/// })
/// .join()
/// .unwrap();
///
/// shared.optimize();
/// assert_eq!(shared.first().unwrap().id(), "B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRoute {
    inner: Arc<Mutex<Route>>,
}

impl SharedRoute {
    /// Creates a handle to an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing route.
    pub fn from_route(route: Route) -> Self {
        Self {
            inner: Arc::new(Mutex::new(route)),
        }
    }

    // A panic while holding the lock cannot leave the Vec half-linked, so a
    // poisoned route is still usable.
    fn lock(&self) -> MutexGuard<'_, Route> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs `f` with exclusive access to the route.
    pub fn with<T>(&self, f: impl FnOnce(&mut Route) -> T) -> T {
        f(&mut self.lock())
    }

    /// Appends a stop.
    pub fn append(&self, stop: Stop) {
        self.lock().append(stop);
    }

    /// Copy of the first stop with the given identifier.
    pub fn find_by_id(&self, id: &str) -> Option<Stop> {
        self.lock().find_by_id(id).cloned()
    }

    /// Removes the first stop with the given identifier.
    pub fn remove_by_id(&self, id: &str) -> bool {
        self.lock().remove_by_id(id)
    }

    /// Total distance of the current order.
    pub fn total_distance(&self) -> f64 {
        self.lock().total_distance()
    }

    /// Re-sequences the route under the lock.
    pub fn optimize(&self) -> OptimizationReport {
        self.lock().optimize_with_report()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the first stop.
    pub fn first(&self) -> Option<Stop> {
        self.lock().first().cloned()
    }

    /// Summary of the current order.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary::of(&self.lock())
    }

    /// Consistent copy of the whole route.
    pub fn snapshot(&self) -> Route {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_concurrent_appends() {
        let shared = SharedRoute::new();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let s = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        s.append(Stop::new(format!("{t}-{i}"), t * 10 + i, i, 0));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread");
        }
        assert_eq!(shared.len(), 100);
    }

    #[test]
    fn test_shared_optimize_while_reading() {
        let route: Route = (0..200).map(|i| Stop::new(format!("{i}"), 999 - i, i, 0)).collect();
        let shared = SharedRoute::from_route(route);
        let reader = shared.clone();
        let t = thread::spawn(move || {
            for _ in 0..50 {
                assert_eq!(reader.snapshot().len(), 200);
            }
        });
        shared.optimize();
        t.join().expect("reader");
        assert_eq!(shared.len(), 200);
    }

    #[test]
    fn test_shared_find_remove() {
        let shared = SharedRoute::from_route([Stop::new("A", 1, 1, 1)].into_iter().collect());
        assert_eq!(shared.find_by_id("A").map(|s| s.x()), Some(1));
        assert!(shared.remove_by_id("A"));
        assert!(shared.is_empty());
        assert_eq!(shared.total_distance(), 0.0);
        assert_eq!(shared.summary().stops, 0);
    }

    #[test]
    fn test_shared_with() {
        let shared = SharedRoute::new();
        let n = shared.with(|r| {
            r.append(Stop::new("A", 0, 3, 1));
            r.append(Stop::new("B", 4, 0, 2));
            r.len()
        });
        assert_eq!(n, 2);
        assert!((shared.total_distance() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_shared_recovers_from_poison() {
        let shared = SharedRoute::new();
        let s = shared.clone();
        let _ = thread::spawn(move || {
            s.with(|r| {
                r.append(Stop::new("A", 0, 0, 1));
                panic!("boom");
            })
        })
        .join();
        assert_eq!(shared.len(), 1);
    }
}
