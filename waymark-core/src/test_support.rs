//! Test doubles and helpers shared by unit and behaviour tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;

use async_trait::async_trait;
use geo::Coord;

use crate::{
    DirectionsError, DirectionsProvider, GeocodeError, Geocoder, RoutePath, RouteSink, Waypoint,
};

/// Run `future` to completion on a throwaway current-thread runtime.
///
/// # Panics
///
/// Panics if the runtime cannot be built; acceptable in tests.
pub fn block_on_for_tests<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build Tokio runtime")
        .block_on(future)
}

/// In-memory [`Geocoder`] backed by a fixed address book.
///
/// Known addresses resolve to their configured coordinate; anything else
/// yields [`GeocodeError::NoMatch`], and empty text yields
/// [`GeocodeError::EmptyQuery`] like a real adapter would.
#[derive(Debug, Clone, Default)]
pub struct StubGeocoder {
    entries: HashMap<String, Coord<f64>>,
}

impl StubGeocoder {
    /// Create a stub that knows no addresses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `address` as resolving to `coordinate`.
    #[must_use]
    pub fn with_entry(mut self, address: impl Into<String>, coordinate: Coord<f64>) -> Self {
        self.entries.insert(address.into(), coordinate);
        self
    }
}

#[async_trait(?Send)]
impl Geocoder for StubGeocoder {
    async fn resolve(&self, address: &str) -> Result<Waypoint, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        self.entries
            .get(address)
            .map(|coordinate| Waypoint::new(address, *coordinate))
            .ok_or_else(|| GeocodeError::NoMatch {
                query: address.to_owned(),
            })
    }
}

/// Scripted [`DirectionsProvider`] that replays queued responses.
///
/// Each call consumes the next scripted response in order. Once the script
/// runs out, calls answer with an empty candidate list, which planners treat
/// as a segment with no paths.
#[derive(Debug, Default)]
pub struct StubDirectionsProvider {
    script: RefCell<VecDeque<Result<Vec<RoutePath>, DirectionsError>>>,
}

impl StubDirectionsProvider {
    /// Create a provider with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response carrying `candidates`.
    #[must_use]
    pub fn with_candidates(self, candidates: Vec<RoutePath>) -> Self {
        self.script.borrow_mut().push_back(Ok(candidates));
        self
    }

    /// Queue a failing response carrying `error`.
    #[must_use]
    pub fn with_failure(self, error: DirectionsError) -> Self {
        self.script.borrow_mut().push_back(Err(error));
        self
    }
}

#[async_trait(?Send)]
impl DirectionsProvider for StubDirectionsProvider {
    async fn candidate_paths(
        &self,
        _origin: Coord<f64>,
        _destination: Coord<f64>,
    ) -> Result<Vec<RoutePath>, DirectionsError> {
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// One observable presentation step.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    /// The full marker set was (re)displayed.
    ShowWaypoints(Vec<Waypoint>),
    /// One chosen path was drawn.
    DrawPath(RoutePath),
    /// Every marker and path was removed at once.
    ClearAll,
}

/// [`RouteSink`] that records every call for later assertions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    /// Events in call order.
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Create a sink with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Distances of the drawn paths, in drawing order.
    #[must_use]
    pub fn drawn_distances(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::DrawPath(path) => Some(path.distance()),
                _ => None,
            })
            .collect()
    }
}

impl RouteSink for RecordingSink {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        self.events
            .push(SinkEvent::ShowWaypoints(waypoints.to_vec()));
    }

    fn draw_path(&mut self, path: &RoutePath) {
        self.events.push(SinkEvent::DrawPath(path.clone()));
    }

    fn clear_all(&mut self) {
        self.events.push(SinkEvent::ClearAll);
    }
}

/// Build a two-point path with the given reported distance.
///
/// # Panics
///
/// Panics when `distance` is negative or not finite; acceptable in tests.
#[must_use]
pub fn path_with_distance(distance: f64) -> RoutePath {
    RoutePath::new(
        vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }],
        distance,
    )
    .expect("test paths use valid distances")
}

/// Build `count` waypoints labelled `wp0`, `wp1`, ... along a diagonal.
#[must_use]
pub fn waypoint_chain(count: usize) -> Vec<Waypoint> {
    (0..count)
        .map(|i| {
            let offset = i as f64;
            Waypoint::new(
                format!("wp{i}"),
                Coord {
                    x: offset,
                    y: offset,
                },
            )
        })
        .collect()
}
