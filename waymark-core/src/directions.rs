//! Fetch candidate walking paths between two coordinates.
//!
//! The [`DirectionsProvider`] trait abstracts the routing service. One call
//! covers one segment: the service is asked for walking directions with
//! alternatives enabled and answers with every candidate it found. Ranking
//! the candidates is the planner's job, not the provider's.

use async_trait::async_trait;
use geo::Coord;
use thiserror::Error;

use crate::RoutePath;

/// Errors from [`DirectionsProvider::candidate_paths`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request exceeded the configured timeout.
    #[error("directions request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The request URL.
        url: String,
        /// The configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service returned a non-success HTTP status.
    #[error("directions request to {url} failed with HTTP status {status}: {message}")]
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
    /// The service answered with its own error code.
    #[error("directions service error {code}: {message}")]
    ServiceError {
        /// Service-specific error code.
        code: String,
        /// Service-supplied description.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse directions response: {message}")]
    ParseError {
        /// Description of the failure.
        message: String,
    },
}

/// Fetch every candidate walking path for one segment.
///
/// Implementations request alternatives and return them in the service's
/// own order; an empty list is a legal answer and means the service found
/// no way to connect the pair. Futures need not be `Send`, so providers may
/// keep single-threaded state.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use geo::Coord;
/// use waymark_core::{DirectionsError, DirectionsProvider, RoutePath};
///
/// struct StraightLine;
///
/// #[async_trait(?Send)]
/// impl DirectionsProvider for StraightLine {
///     async fn candidate_paths(
///         &self,
///         origin: Coord<f64>,
///         destination: Coord<f64>,
///     ) -> Result<Vec<RoutePath>, DirectionsError> {
///         let path = RoutePath::new(vec![origin, destination], 1.0)
///             .map_err(|err| DirectionsError::ParseError {
///                 message: err.to_string(),
///             })?;
///         Ok(vec![path])
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let destination = Coord { x: 1.0, y: 0.0 };
/// let candidates = StraightLine.candidate_paths(origin, destination).await.unwrap();
/// assert_eq!(candidates.len(), 1);
/// # });
/// ```
#[async_trait(?Send)]
pub trait DirectionsProvider {
    /// Request candidate walking paths from `origin` to `destination`.
    async fn candidate_paths(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
    ) -> Result<Vec<RoutePath>, DirectionsError>;
}
