//! HTTP-based geocoding against a Nominatim service.
//!
//! This module provides [`HttpGeocoder`], an implementation of
//! [`waymark_core::Geocoder`] that resolves free-text addresses through the
//! Nominatim search API.
//!
//! # Architecture
//!
//! One resolve call issues one search request with `limit=1` and converts
//! the top hit into a [`waymark_core::Waypoint`] labelled with the caller's
//! address text. An empty result list maps to `GeocodeError::NoMatch`, so
//! unresolvable addresses are rejected before anything reaches the waypoint
//! store.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use waymark_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};
//!
//! # fn main() -> Result<(), waymark_data::ProviderBuildError> {
//! // Create a geocoder with custom configuration
//! let config = HttpGeocoderConfig::new("https://nominatim.openstreetmap.org")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let geocoder = HttpGeocoder::with_config(config)?;
//!
//! // Or use the simple constructor
//! let geocoder = HttpGeocoder::new("https://nominatim.openstreetmap.org")?;
//! # let _ = geocoder;
//! # Ok(())
//! # }
//! ```

mod nominatim;
mod provider;

pub use provider::{DEFAULT_USER_AGENT, HttpGeocoder, HttpGeocoderConfig};
