use geo::Coord;

/// A geocoded stop on the route.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The label
/// echoes the address text the user entered, so markers can name themselves.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Waypoint;
///
/// let waypoint = Waypoint::new("221B Baker Street", Coord { x: -0.1586, y: 51.5237 });
///
/// assert_eq!(waypoint.label, "221B Baker Street");
/// assert_eq!(waypoint.coordinate.y, 51.5237);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// The address text as the user entered it.
    pub label: String,
    /// Resolved position, `x = longitude` and `y = latitude`.
    pub coordinate: Coord<f64>,
}

impl Waypoint {
    /// Construct a waypoint from a label and a resolved coordinate.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waymark_core::Waypoint;
    ///
    /// let waypoint = Waypoint::new("home", Coord { x: 0.0, y: 0.0 });
    /// assert_eq!(waypoint.label, "home");
    /// ```
    pub fn new(label: impl Into<String>, coordinate: Coord<f64>) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }
}
