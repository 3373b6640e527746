use std::f64::consts::TAU;

use super::{Point, Polygon, SectorSpan};
use crate::config::Subdivisions;
use crate::config::standard::MIN_DISC_VERTICES;

/// Sample an arc from `angle_start` to `angle_end` (CCW sweep)
///
/// Returns `subdivisions + 1` points evenly spaced in angle, both endpoints
/// included.
///
/// # Arguments
/// * `radius` - Arc radius in mm
/// * `angle_start` - Start angle in radians
/// * `angle_end` - End angle in radians
/// * `subdivisions` - Number of straight segments along the arc
pub fn arc_points(
    radius: f64,
    angle_start: f64,
    angle_end: f64,
    subdivisions: Subdivisions,
) -> Vec<Point> {
    let n = subdivisions.get();

    // Both endpoints land exactly on the given angles
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::from_polar(radius, angle_start * (1.0 - t) + angle_end * t)
        })
        .collect()
}

/// Build a CCW polygon for the annular wedge between two radii
///
/// The inner arc runs backward (end to start) and the outer arc runs forward,
/// so the wedge interior stays on the left of every edge. Running both arcs in
/// the same direction crosses the two radial edges; running the inner arc
/// forward and the outer arc backward winds clockwise.
pub fn ring_sector_polygon(
    r_inner: f64,
    r_outer: f64,
    span: &SectorSpan,
    subdivisions: Subdivisions,
) -> Polygon {
    debug_assert!(r_inner < r_outer);

    let mut vertices = arc_points(r_inner, span.start, span.end, subdivisions);
    vertices.reverse();
    vertices.extend(arc_points(r_outer, span.start, span.end, subdivisions));

    Polygon::new(vertices)
}

/// Approximate a full disc as a CCW polygon
///
/// Uses at least `MIN_DISC_VERTICES` points so the bull stays round at low
/// subdivision counts.
pub fn disc_polygon(radius: f64, subdivisions: Subdivisions) -> Polygon {
    let n = subdivisions.get().max(MIN_DISC_VERTICES);

    let vertices = (0..n)
        .map(|i| Point::from_polar(radius, TAU * i as f64 / n as f64))
        .collect();

    Polygon::new(vertices)
}
