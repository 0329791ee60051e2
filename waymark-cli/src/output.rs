//! Route presentation sinks for terminal text and GeoJSON documents.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use waymark_core::{RoutePath, RouteSink, Waypoint};

/// Output encodings supported by the `route` command.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable lines on the terminal.
    #[default]
    Text,
    /// A GeoJSON FeatureCollection of waypoint markers and path lines.
    Geojson,
}

/// One numbered stop line, latitude before longitude.
pub(crate) fn waypoint_line(position: usize, waypoint: &Waypoint) -> String {
    format!(
        "{position:>2}. {} ({:.5}, {:.5})",
        waypoint.label, waypoint.coordinate.y, waypoint.coordinate.x
    )
}

/// Streams presentation events as human-readable terminal lines.
///
/// Write failures are dropped; the sink contract is infallible.
pub(crate) struct TerminalSink<W> {
    writer: W,
    segments: usize,
    total_metres: f64,
}

impl<W: Write> TerminalSink<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer,
            segments: 0,
            total_metres: 0.0,
        }
    }

    /// Sum of the distances drawn since construction or the last clear.
    pub(crate) fn total_metres(&self) -> f64 {
        self.total_metres
    }
}

impl<W: Write> RouteSink for TerminalSink<W> {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        // The store appends one waypoint per add, so the tail entry is new.
        if let Some(waypoint) = waypoints.last() {
            let _ = writeln!(self.writer, "{}", waypoint_line(waypoints.len(), waypoint));
        }
    }

    fn draw_path(&mut self, path: &RoutePath) {
        self.segments += 1;
        self.total_metres += path.distance();
        let _ = writeln!(
            self.writer,
            "segment {}: {:.1} m ({} points)",
            self.segments,
            path.distance(),
            path.points().len()
        );
    }

    fn clear_all(&mut self) {
        self.segments = 0;
        self.total_metres = 0.0;
        let _ = writeln!(self.writer, "cleared all waypoints and paths");
    }
}

/// Buffers presentation events and renders one GeoJSON FeatureCollection.
#[derive(Debug, Default)]
pub(crate) struct GeoJsonSink {
    waypoints: Vec<Waypoint>,
    paths: Vec<RoutePath>,
}

impl GeoJsonSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Render the buffered state as a FeatureCollection value.
    ///
    /// Waypoints become Point features numbered in insertion order; chosen
    /// paths become LineString features carrying their metre distance.
    /// Coordinates follow the GeoJSON axis order, longitude first.
    pub(crate) fn to_feature_collection(&self) -> Value {
        let markers = self.waypoints.iter().enumerate().map(|(index, waypoint)| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [waypoint.coordinate.x, waypoint.coordinate.y]
                },
                "properties": {
                    "index": index + 1,
                    "label": waypoint.label
                }
            })
        });
        let lines = self.paths.iter().enumerate().map(|(index, path)| {
            let coordinates: Vec<Value> = path
                .points()
                .iter()
                .map(|point| json!([point.x, point.y]))
                .collect();
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates
                },
                "properties": {
                    "segment": index + 1,
                    "distance_metres": path.distance()
                }
            })
        });
        json!({
            "type": "FeatureCollection",
            "features": markers.chain(lines).collect::<Vec<Value>>()
        })
    }
}

impl RouteSink for GeoJsonSink {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        self.waypoints = waypoints.to_vec();
    }

    fn draw_path(&mut self, path: &RoutePath) {
        self.paths.push(path.clone());
    }

    fn clear_all(&mut self) {
        self.waypoints.clear();
        self.paths.clear();
    }
}
