//! Nominatim search API response types.
//!
//! This module provides deserialisation types for the Nominatim `/search`
//! endpoint in its `jsonv2` format. A search response is a JSON array of
//! place entries ordered by relevance.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use geo::Coord;
use serde::Deserialize;

/// One place entry from a Nominatim search response.
///
/// Nominatim serialises coordinates as decimal strings, so turning them
/// into numbers is an explicit, fallible step rather than part of
/// deserialisation.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Latitude as a decimal string.
    pub lat: String,
    /// Longitude as a decimal string.
    pub lon: String,
    /// Full display name of the matched place, when provided.
    pub display_name: Option<String>,
}

impl SearchResult {
    /// Parse the entry's WGS84 coordinate, `x = longitude` and
    /// `y = latitude`.
    ///
    /// # Errors
    ///
    /// Returns the parse failure when either field is not a valid decimal
    /// number.
    pub fn coordinate(&self) -> Result<Coord<f64>, std::num::ParseFloatError> {
        let lat: f64 = self.lat.parse()?;
        let lon: f64 = self.lon.parse()?;
        Ok(Coord { x: lon, y: lat })
    }
}
