//! Candidate walking paths returned by a directions service.
//!
//! A path is an ordered polyline plus the service's own length measurement.
//! Distances are kept exactly as reported so that selecting the shortest
//! alternative compares in the service's units, never a recomputation.

use geo::Coord;
use thiserror::Error;

/// Errors returned by [`RoutePath::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutePathError {
    /// Fewer than two points cannot describe a line.
    #[error("a path requires at least two points, got {count}")]
    NotEnoughPoints {
        /// Number of points supplied.
        count: usize,
    },
    /// The reported distance was negative, NaN, or infinite.
    #[error("path distance must be a finite non-negative number, got {distance}")]
    InvalidDistance {
        /// The rejected distance value.
        distance: f64,
    },
}

/// One alternative path between two coordinates.
///
/// Construction validates the polyline and the distance, so downstream
/// comparisons never meet NaN or a degenerate single-point line.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::RoutePath;
///
/// # fn main() -> Result<(), waymark_core::RoutePathError> {
/// let path = RoutePath::new(
///     vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 }],
///     111_000.0,
/// )?;
/// assert_eq!(path.points().len(), 2);
/// assert_eq!(path.distance(), 111_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    points: Vec<Coord<f64>>,
    distance: f64,
}

impl RoutePath {
    /// Validate and construct a path from its polyline and reported length.
    ///
    /// # Errors
    ///
    /// Returns [`RoutePathError::NotEnoughPoints`] for polylines shorter
    /// than two points and [`RoutePathError::InvalidDistance`] when the
    /// distance is negative or not finite.
    pub fn new(points: Vec<Coord<f64>>, distance: f64) -> Result<Self, RoutePathError> {
        if points.len() < 2 {
            return Err(RoutePathError::NotEnoughPoints {
                count: points.len(),
            });
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(RoutePathError::InvalidDistance { distance });
        }
        Ok(Self { points, distance })
    }

    /// Polyline vertices in travel order, `x = longitude` and `y = latitude`.
    #[must_use]
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Path length in the directions service's own units.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line() -> Vec<Coord<f64>> {
        vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }]
    }

    #[rstest]
    fn accepts_a_two_point_line() {
        let path = RoutePath::new(line(), 12.5).expect("two points and a finite distance");
        assert_eq!(path.points().len(), 2);
        assert_eq!(path.distance(), 12.5);
    }

    #[rstest]
    #[case::empty(vec![], 0)]
    #[case::single(vec![Coord { x: 0.0, y: 0.0 }], 1)]
    fn rejects_short_polylines(#[case] points: Vec<Coord<f64>>, #[case] expected_count: usize) {
        let err = RoutePath::new(points, 1.0).expect_err("short polyline must be rejected");
        assert_eq!(
            err,
            RoutePathError::NotEnoughPoints {
                count: expected_count
            }
        );
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn rejects_invalid_distances(#[case] distance: f64) {
        let err = RoutePath::new(line(), distance).expect_err("invalid distance must be rejected");
        assert!(matches!(err, RoutePathError::InvalidDistance { .. }));
    }

    #[rstest]
    fn zero_distance_is_legal() {
        let path = RoutePath::new(line(), 0.0).expect("zero-length paths are valid");
        assert_eq!(path.distance(), 0.0);
    }
}
