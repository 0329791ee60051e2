//! Presentation boundary for markers and drawn paths.
//!
//! A [`RouteSink`] is whatever renders the route: a map view, a terminal,
//! a file writer. The controller talks to it in three observable steps and
//! nothing else, so any renderer that can show markers, draw a line, and
//! wipe the display can sit behind this trait.

use crate::{RoutePath, Waypoint};

/// Render target for waypoints and chosen paths.
///
/// Implementations are infallible from the caller's point of view: a sink
/// that can fail internally (for example one writing to a stream) deals
/// with that itself rather than aborting route planning.
///
/// # Examples
///
/// ```
/// use waymark_core::{RoutePath, RouteSink, Waypoint};
///
/// #[derive(Default)]
/// struct CountingSink {
///     markers: usize,
///     lines: usize,
/// }
///
/// impl RouteSink for CountingSink {
///     fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
///         self.markers = waypoints.len();
///     }
///
///     fn draw_path(&mut self, _path: &RoutePath) {
///         self.lines += 1;
///     }
///
///     fn clear_all(&mut self) {
///         self.markers = 0;
///         self.lines = 0;
///     }
/// }
///
/// let mut sink = CountingSink::default();
/// sink.show_waypoints(&[]);
/// sink.clear_all();
/// assert_eq!(sink.lines, 0);
/// ```
pub trait RouteSink {
    /// Replace the displayed markers with the full current waypoint list.
    fn show_waypoints(&mut self, waypoints: &[Waypoint]);

    /// Draw one chosen path on top of whatever is already shown.
    fn draw_path(&mut self, path: &RoutePath);

    /// Remove every marker and drawn path in one observable step.
    fn clear_all(&mut self);
}
