//! Plan a walking route as a chain of consecutive-pair segments.
//!
//! The planner walks the waypoint list pairwise, asks a
//! [`DirectionsProvider`] for candidate paths per pair, and keeps the
//! shortest alternative for each. Segments are independent: no global
//! optimisation happens across pairs, the route is simply the chain of
//! per-segment winners in waypoint order.
//!
//! Segment requests run concurrently. Results are reported in segment
//! order regardless of completion order, so a failure always names the
//! lowest failing segment index.

use futures_util::future::join_all;
use thiserror::Error;

use crate::{DirectionsError, DirectionsProvider, RoutePath, Waypoint};

/// Reasons a single segment could not be planned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The directions service failed for this segment.
    #[error(transparent)]
    Directions(#[from] DirectionsError),
    /// The directions service answered but offered no candidate paths.
    #[error("directions service returned no candidate paths")]
    NoCandidates,
}

/// A segment of the requested route could not be planned.
///
/// Segment `i` connects waypoint `i` to waypoint `i + 1`. Segments planned
/// before the failing one keep their results; there is no rollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to plan segment {segment}: {source}")]
pub struct PlanError {
    /// Zero-based index of the failing segment.
    pub segment: usize,
    /// What went wrong for that segment.
    #[source]
    pub source: SegmentError,
}

/// Select the shortest path from a candidate list.
///
/// Runs the running-minimum scan the route relies on: start from the first
/// candidate and replace it only on a strictly smaller distance, so the
/// earliest of equally short candidates wins. Returns `None` for an empty
/// list.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{RoutePath, shortest_candidate};
///
/// # fn main() -> Result<(), waymark_core::RoutePathError> {
/// let line = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];
/// let candidates = vec![
///     RoutePath::new(line.clone(), 5.0)?,
///     RoutePath::new(line.clone(), 3.2)?,
///     RoutePath::new(line, 3.2)?,
/// ];
///
/// let chosen = shortest_candidate(&candidates).unwrap();
/// assert_eq!(chosen.distance(), 3.2);
/// assert!(std::ptr::eq(chosen, &candidates[1]));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn shortest_candidate(candidates: &[RoutePath]) -> Option<&RoutePath> {
    let mut candidates = candidates.iter();
    let mut best = candidates.next()?;
    for candidate in candidates {
        // Strict comparison keeps the earliest of equally short paths.
        if candidate.distance() < best.distance() {
            best = candidate;
        }
    }
    Some(best)
}

/// Plans routes over an ordered waypoint sequence.
///
/// The planner owns its [`DirectionsProvider`] and holds no other state;
/// repeated planning calls re-request every segment.
#[derive(Debug, Clone)]
pub struct RoutePlanner<D> {
    directions: D,
}

impl<D: DirectionsProvider> RoutePlanner<D> {
    /// Create a planner backed by `directions`.
    pub fn new(directions: D) -> Self {
        Self { directions }
    }

    /// Plan every consecutive-pair segment, reporting each outcome.
    ///
    /// Requests run concurrently; the returned vector is in segment order
    /// with one entry per pair. Fewer than two waypoints produce an empty
    /// vector because there is nothing to plan.
    pub async fn plan_segments(&self, waypoints: &[Waypoint]) -> Vec<Result<RoutePath, PlanError>> {
        let legs = waypoints
            .iter()
            .zip(waypoints.iter().skip(1))
            .enumerate()
            .map(|(segment, (origin, destination))| self.plan_segment(segment, origin, destination));
        join_all(legs).await
    }

    /// Plan the full route, failing on the lowest failing segment.
    ///
    /// On success the result holds exactly `N - 1` chosen paths for `N`
    /// waypoints. Fewer than two waypoints are legal and yield an empty
    /// route with no error.
    ///
    /// # Errors
    ///
    /// Returns the [`PlanError`] of the lowest-indexed segment whose
    /// directions request failed or produced no candidates.
    pub async fn plan_route(&self, waypoints: &[Waypoint]) -> Result<Vec<RoutePath>, PlanError> {
        self.plan_segments(waypoints).await.into_iter().collect()
    }

    async fn plan_segment(
        &self,
        segment: usize,
        origin: &Waypoint,
        destination: &Waypoint,
    ) -> Result<RoutePath, PlanError> {
        let candidates = self
            .directions
            .candidate_paths(origin.coordinate, destination.coordinate)
            .await
            .map_err(|source| PlanError {
                segment,
                source: SegmentError::Directions(source),
            })?;

        let chosen = shortest_candidate(&candidates).ok_or(PlanError {
            segment,
            source: SegmentError::NoCandidates,
        })?;

        log::debug!(
            "segment {segment} ({} -> {}): picked {:.1} from {} candidate(s)",
            origin.label,
            destination.label,
            chosen.distance(),
            candidates.len()
        );

        Ok(chosen.clone())
    }
}
