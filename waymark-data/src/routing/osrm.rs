//! OSRM API response types for the Route service.
//!
//! This module provides deserialisation types for the OSRM Route API
//! response format. The Route service computes the fastest routes between
//! coordinates in order and can return alternative routes when asked.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// The response carries candidate routes on success or an error message on
/// failure. The `code` field indicates the response status.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route was found between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes; the service's preferred route first, alternatives
    /// after it when alternatives were requested.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One candidate route from the Route service.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Total route distance in metres.
    pub distance: f64,

    /// Route geometry; GeoJSON because requests ask for
    /// `geometries=geojson`.
    pub geometry: Geometry,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]` pairs along the line.
    pub coordinates: Vec<[f64; 2]>,
}
