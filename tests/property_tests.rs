//! Property-based tests for route maintenance and optimization.
//!
//! # Invariants tested
//!
//! - **Size:** appending `n` stops yields `len() == n`; optimize keeps it.
//! - **Distance:** `total_distance` is the literal sum of consecutive legs.
//! - **Permutation:** optimize reorders the same multiset of stops.
//! - **Depot-nearest start:** after optimize the first stop is closest to `(0, 0)`.
//! - **Greedy step:** every later stop is nearest to its predecessor among the rest.
//! - **Removal:** removing a present id shrinks the route by one; an absent id is a no-op.

use proptest::prelude::*;
use u_dispatch::distance::euclidean;
use u_dispatch::models::{Route, Stop};

fn coords_strategy(max_len: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0..1000i32, 0..1000i32), 0..max_len)
}

fn build_route(coords: &[(i32, i32)]) -> Route {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let id = format!("{:011}", 10_010_000_000u64 + i as u64);
            Stop::new(id, x, y, i as u32 + 1)
        })
        .collect()
}

fn sorted(route: &Route) -> Vec<Stop> {
    let mut stops = route.stops().to_vec();
    stops.sort_by(|a, b| a.id().cmp(b.id()));
    stops
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn size_matches_appends(coords in coords_strategy(60)) {
        let route = build_route(&coords);
        prop_assert_eq!(route.len(), coords.len());
        prop_assert_eq!(route.is_empty(), coords.is_empty());
    }

    #[test]
    fn total_distance_is_sum_of_legs(coords in coords_strategy(60)) {
        let route = build_route(&coords);
        let expected: f64 = coords
            .windows(2)
            .map(|w| {
                let dx = f64::from(w[0].0 - w[1].0);
                let dy = f64::from(w[0].1 - w[1].1);
                (dx * dx + dy * dy).sqrt()
            })
            .sum();
        prop_assert!((route.total_distance() - expected).abs() < 1e-6);
    }

    #[test]
    fn optimize_is_permutation(coords in coords_strategy(60)) {
        let original = build_route(&coords);
        let mut route = original.clone();
        route.optimize();
        prop_assert_eq!(route.len(), original.len());
        prop_assert_eq!(sorted(&route), sorted(&original));
    }

    #[test]
    fn optimize_starts_nearest_to_depot(coords in coords_strategy(60)) {
        let mut route = build_route(&coords);
        route.optimize();
        let depot = Stop::warehouse();
        if let Some(first) = route.first() {
            let d_first = euclidean(&depot, first);
            for stop in &route {
                prop_assert!(d_first <= euclidean(&depot, stop));
            }
        }
    }

    #[test]
    fn optimize_each_step_is_greedy(coords in coords_strategy(40)) {
        let mut route = build_route(&coords);
        route.optimize();
        let stops = route.stops();
        for i in 1..stops.len() {
            let leg = euclidean(&stops[i - 1], &stops[i]);
            for later in &stops[i..] {
                prop_assert!(leg <= euclidean(&stops[i - 1], later));
            }
        }
    }

    #[test]
    fn optimize_is_idempotent(coords in coords_strategy(40)) {
        let mut once = build_route(&coords);
        once.optimize();
        let mut twice = once.clone();
        twice.optimize();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_present_and_absent(coords in coords_strategy(40), pick in any::<prop::sample::Index>()) {
        let mut route = build_route(&coords);
        let before = route.len();

        prop_assert!(!route.remove_by_id("missing"));
        prop_assert_eq!(route.len(), before);

        if before > 0 {
            let id = route.stops()[pick.index(before)].id().to_owned();
            prop_assert!(route.remove_by_id(&id));
            prop_assert_eq!(route.len(), before - 1);
            prop_assert!(route.find_by_id(&id).is_none());
        }
    }
}
