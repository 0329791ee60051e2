//! Property-based tests for route planning and candidate selection.
//!
//! These tests use `proptest` to assert invariants that must hold for all
//! valid inputs, complementing the example-driven unit and behavioural
//! tests.
//!
//! # Invariants tested
//!
//! - **Segment count:** `N` waypoints always plan to `N - 1` paths when
//!   every segment offers candidates.
//! - **Minimum distance:** each chosen path is the per-segment minimum, and
//!   ties resolve to the earliest-listed candidate.
//! - **Order preservation:** appends never reorder stored waypoints.
//! - **Cleared stores:** planning an emptied store yields an empty route
//!   with no error.

use geo::Coord;
use proptest::prelude::*;
use waymark_core::test_support::{
    StubDirectionsProvider, block_on_for_tests, path_with_distance, waypoint_chain,
};
use waymark_core::{RoutePlanner, WaypointStore, shortest_candidate};

/// Script one stub response per segment from the given distance lists.
fn provider_from_distances(segments: &[Vec<f64>]) -> StubDirectionsProvider {
    segments.iter().fold(
        StubDirectionsProvider::new(),
        |provider, candidate_distances| {
            provider.with_candidates(
                candidate_distances
                    .iter()
                    .map(|&distance| path_with_distance(distance))
                    .collect(),
            )
        },
    )
}

/// Non-empty candidate distance lists, one per segment.
fn segment_distances_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    proptest::collection::vec(
        proptest::collection::vec(0.0f64..10_000.0, 1..5),
        1..7,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: planning `N` waypoints yields exactly `N - 1` chosen paths
    /// when every segment has at least one candidate, and each chosen path
    /// carries its segment's minimum distance.
    #[test]
    fn plan_route_is_the_chain_of_per_segment_minima(
        segments in segment_distances_strategy(),
    ) {
        let waypoints = waypoint_chain(segments.len() + 1);
        let planner = RoutePlanner::new(provider_from_distances(&segments));

        let route = block_on_for_tests(planner.plan_route(&waypoints))
            .expect("every segment has candidates");

        prop_assert_eq!(route.len(), waypoints.len() - 1);

        let chosen: Vec<f64> = route.iter().map(|path| path.distance()).collect();
        let expected: Vec<f64> = segments
            .iter()
            .map(|candidates| candidates.iter().copied().fold(f64::INFINITY, f64::min))
            .collect();
        prop_assert_eq!(chosen, expected);
    }

    /// Property: the selected candidate is no longer than any other, and on
    /// ties the earliest-listed candidate wins.
    ///
    /// Small integer distances make ties frequent enough to exercise the
    /// first-seen rule on most runs.
    #[test]
    fn selection_is_minimal_and_tie_stable(
        distances in proptest::collection::vec(0u8..5, 1..8),
    ) {
        let candidates: Vec<_> = distances
            .iter()
            .map(|&d| path_with_distance(f64::from(d)))
            .collect();

        let chosen = shortest_candidate(&candidates).expect("list is non-empty");

        prop_assert!(
            candidates.iter().all(|c| chosen.distance() <= c.distance()),
            "chosen {} is not minimal",
            chosen.distance()
        );

        let earliest = candidates
            .iter()
            .find(|c| c.distance() == chosen.distance())
            .expect("the chosen distance appears in the list");
        prop_assert!(
            std::ptr::eq(chosen, earliest),
            "tie was not broken towards the earliest candidate"
        );
    }

    /// Property: `all()` after `k` appends equals the appended sequence in
    /// call order.
    #[test]
    fn appends_preserve_call_order(labels in proptest::collection::vec("[a-z]{1,8}", 0..12)) {
        let mut store = WaypointStore::new();
        for (i, label) in labels.iter().enumerate() {
            let offset = i as f64;
            store.add(label.clone(), Coord { x: offset, y: -offset });
        }

        let stored: Vec<&str> = store.all().iter().map(|w| w.label.as_str()).collect();
        let added: Vec<&str> = labels.iter().map(String::as_str).collect();
        prop_assert_eq!(stored, added);
    }

    /// Property: after a clear the store is empty and planning it produces
    /// an empty route with no error.
    #[test]
    fn cleared_stores_plan_nothing(labels in proptest::collection::vec("[a-z]{1,8}", 0..6)) {
        let mut store = WaypointStore::new();
        for label in &labels {
            store.add(label.clone(), Coord { x: 0.0, y: 0.0 });
        }
        store.clear();

        let planner = RoutePlanner::new(StubDirectionsProvider::new());
        let route = block_on_for_tests(planner.plan_route(store.all()))
            .expect("an empty store plans without error");

        prop_assert_eq!(store.len(), 0);
        prop_assert!(route.is_empty());
    }
}
