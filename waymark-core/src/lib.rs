//! Core domain model for the waymark walking-route planner.
//!
//! Users add addresses, each one is geocoded to a coordinate, and once
//! enough stops exist a walking route is drawn connecting them in order,
//! taking the shortest alternative for every consecutive pair.
//!
//! This crate holds the pieces of that cycle that carry behaviour:
//!
//! - [`WaypointStore`]: ordered stops plus the generation counter that
//!   invalidates lookups still in flight when the list is cleared.
//! - [`Geocoder`] and [`DirectionsProvider`]: async seams for the external
//!   lookup services; HTTP adapters live in `waymark-data`.
//! - [`RoutePlanner`]: consecutive-pair planning and minimum-distance
//!   candidate selection.
//! - [`RouteSink`]: the presentation boundary markers and paths are drawn
//!   through.
//! - [`RouteController`]: wires the above into the add/build/clear actions.
//!
//! Constructors validate their inputs and return `Result` so invalid data
//! is rejected at the boundary rather than surfacing mid-plan.

mod controller;
mod directions;
mod geocode;
mod path;
mod planner;
mod sink;
mod store;
pub mod test_support;
mod waypoint;

pub use controller::{AddOutcome, MIN_WAYPOINTS_FOR_ROUTE, RouteController};
pub use directions::{DirectionsError, DirectionsProvider};
pub use geocode::{GeocodeError, Geocoder};
pub use path::{RoutePath, RoutePathError};
pub use planner::{PlanError, RoutePlanner, SegmentError, shortest_candidate};
pub use sink::RouteSink;
pub use store::WaypointStore;
pub use waypoint::Waypoint;
