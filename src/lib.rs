//! Facade crate for the waymark walking-route planner.
//!
//! This crate re-exports the core domain types and, behind the `http`
//! feature, the HTTP-backed geocoding and directions adapters.

#![forbid(unsafe_code)]

pub use waymark_core::{
    AddOutcome, DirectionsError, DirectionsProvider, GeocodeError, Geocoder,
    MIN_WAYPOINTS_FOR_ROUTE, PlanError, RouteController, RoutePath, RoutePathError, RoutePlanner,
    RouteSink, SegmentError, Waypoint, WaypointStore, shortest_candidate,
};

#[cfg(feature = "http")]
pub use waymark_data::ProviderBuildError;

#[cfg(feature = "http")]
pub use waymark_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};

#[cfg(feature = "http")]
pub use waymark_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
