//! HTTP-based walking directions from an OSRM service.
//!
//! This module provides [`HttpDirectionsProvider`], an implementation of
//! [`waymark_core::DirectionsProvider`] that fetches candidate walking
//! paths from the OSRM Route API.
//!
//! # Architecture
//!
//! One call covers one segment. The provider requests walking directions
//! with alternatives enabled and full GeoJSON geometry, then converts every
//! returned route into a validated [`waymark_core::RoutePath`]. Candidates
//! keep the service's ordering; picking the shortest one is the planner's
//! concern.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use waymark_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//!
//! # fn main() -> Result<(), waymark_data::ProviderBuildError> {
//! // Create a provider with custom configuration
//! let config = HttpDirectionsProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpDirectionsProvider::with_config(config)?;
//!
//! // Or use the simple constructor
//! let provider = HttpDirectionsProvider::new("http://localhost:5000")?;
//! # let _ = provider;
//! # Ok(())
//! # }
//! ```

mod osrm;
mod provider;

pub use provider::{DEFAULT_USER_AGENT, HttpDirectionsProvider, HttpDirectionsProviderConfig};
