//! Ordered storage for the waypoints of the current route.
//!
//! Insertion order is route order. The store is append-only between clears;
//! a clear empties it atomically and advances a generation counter so that
//! results of lookups started before the clear can be recognised as stale
//! and dropped instead of resurrecting deleted stops.

use geo::Coord;

use crate::Waypoint;

/// Ordered, append-only collection of the route's waypoints.
///
/// The store expects a single writer: all mutation goes through `&mut self`,
/// which keeps insertion order deterministic even when geocoding lookups run
/// concurrently and commit their results one at a time.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::WaypointStore;
///
/// let mut store = WaypointStore::new();
/// store.add("first", Coord { x: 0.0, y: 0.0 });
/// store.add("second", Coord { x: 1.0, y: 1.0 });
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.all()[0].label, "first");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
    generation: u64,
}

impl WaypointStore {
    /// Create an empty store at generation zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a waypoint built from a label and coordinate.
    ///
    /// Returns a copy of the stored waypoint.
    pub fn add(&mut self, label: impl Into<String>, coordinate: Coord<f64>) -> Waypoint {
        let waypoint = Waypoint::new(label, coordinate);
        self.waypoints.push(waypoint.clone());
        waypoint
    }

    /// Append `waypoint` only if the store is still at `generation`.
    ///
    /// Callers capture [`WaypointStore::generation`] before starting an
    /// asynchronous lookup and pass it back when the result arrives. If a
    /// clear happened in between, the result is stale: it is dropped and
    /// `None` is returned.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waymark_core::{Waypoint, WaypointStore};
    ///
    /// let mut store = WaypointStore::new();
    /// let generation = store.generation();
    /// store.clear();
    ///
    /// let late = Waypoint::new("late", Coord { x: 0.0, y: 0.0 });
    /// assert!(store.append_if_current(late, generation).is_none());
    /// assert!(store.is_empty());
    /// ```
    pub fn append_if_current(&mut self, waypoint: Waypoint, generation: u64) -> Option<&Waypoint> {
        if generation != self.generation {
            return None;
        }
        self.waypoints.push(waypoint);
        self.waypoints.last()
    }

    /// Empty the store atomically and advance the generation counter.
    ///
    /// Lookups still in flight when this runs carry the previous generation
    /// and will be rejected by [`WaypointStore::append_if_current`].
    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.generation += 1;
    }

    /// Waypoints in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of stored waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the store holds no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Current generation; advances once per [`WaypointStore::clear`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[rstest]
    fn appends_preserve_insertion_order() {
        let mut store = WaypointStore::new();
        store.add("a", coord(0.0, 0.0));
        store.add("b", coord(1.0, 1.0));
        store.add("c", coord(2.0, 2.0));

        let labels: Vec<&str> = store.all().iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn clear_empties_the_store() {
        let mut store = WaypointStore::new();
        store.add("a", coord(0.0, 0.0));
        store.clear();

        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[rstest]
    fn clear_advances_the_generation() {
        let mut store = WaypointStore::new();
        let before = store.generation();
        store.clear();
        assert_eq!(store.generation(), before + 1);
    }

    #[rstest]
    fn current_generation_append_is_accepted() {
        let mut store = WaypointStore::new();
        let generation = store.generation();
        let stored = store.append_if_current(Waypoint::new("a", coord(0.0, 0.0)), generation);

        assert!(stored.is_some());
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn stale_generation_append_is_rejected() {
        let mut store = WaypointStore::new();
        store.add("kept briefly", coord(0.0, 0.0));
        let generation = store.generation();
        store.clear();

        let stored = store.append_if_current(Waypoint::new("late", coord(1.0, 1.0)), generation);

        assert!(stored.is_none());
        assert!(store.is_empty());
    }

    #[rstest]
    fn adds_do_not_advance_the_generation() {
        let mut store = WaypointStore::new();
        let generation = store.generation();
        store.add("a", coord(0.0, 0.0));

        let stored = store.append_if_current(Waypoint::new("b", coord(1.0, 1.0)), generation);

        assert!(stored.is_some());
        assert_eq!(store.len(), 2);
    }
}
