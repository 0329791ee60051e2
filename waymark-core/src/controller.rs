//! Orchestration of the three user actions.
//!
//! The controller owns the waypoint store and wires the geocoder, the
//! planner, and a presentation sink together:
//!
//! - *add address*: resolve the text, append the waypoint, refresh markers;
//! - *build route*: plan every segment and draw each chosen path in order;
//! - *clear all*: empty the store and wipe the display in one step.
//!
//! Adding is split into a capture phase and a commit phase. The store's
//! generation is captured before the asynchronous lookup starts and checked
//! again when the result arrives, so a lookup that completes after a clear
//! is dropped instead of resurrecting a deleted stop.

use crate::{
    DirectionsProvider, GeocodeError, Geocoder, PlanError, RoutePlanner, RouteSink, Waypoint,
    WaypointStore,
};

/// Minimum number of waypoints before the route and clear actions unlock.
pub const MIN_WAYPOINTS_FOR_ROUTE: usize = 3;

/// Result of committing a geocoded waypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The waypoint was appended and the marker display refreshed.
    Added(Waypoint),
    /// The store was cleared while the lookup ran; the result was dropped.
    DiscardedStale,
}

/// Drives the add/build/clear interaction cycle.
///
/// Collaborators are injected at construction, so tests run the whole cycle
/// against stubs and the interaction surface decides what actually renders.
/// The sink is passed per call rather than stored: display ownership stays
/// with the caller.
#[derive(Debug)]
pub struct RouteController<G, D> {
    store: WaypointStore,
    geocoder: G,
    planner: RoutePlanner<D>,
}

impl<G, D> RouteController<G, D>
where
    G: Geocoder,
    D: DirectionsProvider,
{
    /// Create a controller with an empty store.
    pub fn new(geocoder: G, directions: D) -> Self {
        Self {
            store: WaypointStore::new(),
            geocoder,
            planner: RoutePlanner::new(directions),
        }
    }

    /// Resolve `address` and append the waypoint to the route.
    ///
    /// On success the sink receives the full marker set. A lookup that
    /// completes after an intervening [`RouteController::clear`] is
    /// discarded and reported as [`AddOutcome::DiscardedStale`].
    ///
    /// # Errors
    ///
    /// Returns the [`GeocodeError`] of a failed lookup; the store is not
    /// touched in that case.
    pub async fn add_address<S: RouteSink>(
        &mut self,
        address: &str,
        sink: &mut S,
    ) -> Result<AddOutcome, GeocodeError> {
        let generation = self.store.generation();
        let waypoint = self.geocoder.resolve(address).await?;
        Ok(self.commit_waypoint(waypoint, generation, sink))
    }

    /// Commit a geocoded waypoint captured at `generation`.
    ///
    /// This is the continuation half of [`RouteController::add_address`],
    /// public so that surfaces running their own lookup tasks can capture
    /// [`RouteController::generation`] first and commit when the result
    /// arrives.
    pub fn commit_waypoint<S: RouteSink>(
        &mut self,
        waypoint: Waypoint,
        generation: u64,
        sink: &mut S,
    ) -> AddOutcome {
        let label = waypoint.label.clone();
        match self.store.append_if_current(waypoint, generation) {
            Some(stored) => {
                let stored = stored.clone();
                sink.show_waypoints(self.store.all());
                AddOutcome::Added(stored)
            }
            None => {
                log::warn!("dropping stale geocode result for \"{label}\"");
                AddOutcome::DiscardedStale
            }
        }
    }

    /// Plan the stored route and draw each chosen path in waypoint order.
    ///
    /// Returns the number of segments drawn. When a segment fails, paths
    /// drawn for earlier segments stay on the sink; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Returns the [`PlanError`] of the lowest-indexed failing segment.
    pub async fn build_route<S: RouteSink>(&self, sink: &mut S) -> Result<usize, PlanError> {
        let outcomes = self.planner.plan_segments(self.store.all()).await;
        let mut drawn = 0;
        for outcome in outcomes {
            let path = outcome?;
            sink.draw_path(&path);
            drawn += 1;
        }
        Ok(drawn)
    }

    /// Empty the store and wipe the display with a single clear signal.
    pub fn clear<S: RouteSink>(&mut self, sink: &mut S) {
        self.store.clear();
        sink.clear_all();
    }

    /// Whether enough waypoints exist for the route and clear actions.
    #[must_use]
    pub fn route_available(&self) -> bool {
        self.store.len() >= MIN_WAYPOINTS_FOR_ROUTE
    }

    /// Stored waypoints in route order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        self.store.all()
    }

    /// Current store generation; capture before starting a lookup.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }
}
