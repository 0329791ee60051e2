//! HTTP adapters for the waymark route planner.
//!
//! Responsibilities:
//! - Implement the `waymark-core` lookup seams against real services:
//!   Nominatim for geocoding and OSRM for walking directions.
//! - Keep wire formats and transport error mapping out of the core crate.
//!
//! Boundaries:
//! - No domain rules live here; candidate selection and orchestration
//!   belong to `waymark-core`.
//! - Adapters stay async and never own a runtime; callers decide where
//!   the futures run.

use thiserror::Error;

pub mod geocoding;
pub mod routing;

/// Error type for HTTP adapter construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
