//! Resolve free-text addresses to waypoints.
//!
//! The [`Geocoder`] trait abstracts the lookup service. Callers hand over the
//! address text exactly as the user typed it; implementations answer with a
//! [`Waypoint`] echoing that text as the label, or a [`GeocodeError`]. A
//! failed lookup never touches the waypoint list — rejection happens here,
//! before anything is stored.

use async_trait::async_trait;
use thiserror::Error;

use crate::Waypoint;

/// Errors from [`Geocoder::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The query was empty or whitespace only.
    #[error("address text must not be empty")]
    EmptyQuery,
    /// The service answered but knew no matching location.
    #[error("no location found for \"{query}\"")]
    NoMatch {
        /// The address text that failed to resolve.
        query: String,
    },
    /// The request exceeded the configured timeout.
    #[error("geocoding request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The request URL.
        url: String,
        /// The configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service returned a non-success HTTP status.
    #[error("geocoding request to {url} failed with HTTP status {status}: {message}")]
    HttpError {
        /// The request URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Description of the failure.
        message: String,
    },
    /// The request failed before an HTTP status was available.
    #[error("network error for {url}: {message}")]
    NetworkError {
        /// The request URL.
        url: String,
        /// Description of the failure.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse geocoding response: {message}")]
    ParseError {
        /// Description of the failure.
        message: String,
    },
}

/// Resolve one address to one waypoint.
///
/// One call, one lookup: implementations perform no batching and no retry.
/// The trait is object-safe and its futures need not be `Send`, so adapters
/// may keep single-threaded state.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use geo::Coord;
/// use waymark_core::{GeocodeError, Geocoder, Waypoint};
///
/// struct OriginGeocoder;
///
/// #[async_trait(?Send)]
/// impl Geocoder for OriginGeocoder {
///     async fn resolve(&self, address: &str) -> Result<Waypoint, GeocodeError> {
///         if address.trim().is_empty() {
///             return Err(GeocodeError::EmptyQuery);
///         }
///         Ok(Waypoint::new(address, Coord { x: 0.0, y: 0.0 }))
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let waypoint = OriginGeocoder.resolve("Null Island").await.unwrap();
/// assert_eq!(waypoint.label, "Null Island");
/// # });
/// ```
#[async_trait(?Send)]
pub trait Geocoder {
    /// Resolve `address` to a waypoint labelled with the same text.
    async fn resolve(&self, address: &str) -> Result<Waypoint, GeocodeError>;
}
