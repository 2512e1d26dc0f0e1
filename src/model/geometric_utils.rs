//! Geometric helpers for straight segments in the diagram plane.

use geo::algorithm::Distance;
use geo::{Euclidean, Line, Point};
use ndarray::Array1;

/// Euclidean length of the segment from `start` to `end`.
pub fn segment_length(start: &Array1<f64>, end: &Array1<f64>) -> f64 {
    let direction = end - start;
    direction.mapv(|x| x.powi(2)).sum().sqrt()
}

/// Unit vector pointing from `start` to `end`, with the segment length.
///
/// Returns `None` when the points coincide.
pub fn unit_direction(start: &Array1<f64>, end: &Array1<f64>) -> Option<(Array1<f64>, f64)> {
    let length = segment_length(start, end);
    if length == 0.0 || !length.is_finite() {
        return None;
    }
    Some(((end - start) / length, length))
}

/// Point reached after travelling `travelled` units from `start` along `unit`.
pub fn point_along(start: &Array1<f64>, unit: &Array1<f64>, travelled: f64) -> Array1<f64> {
    start + &(unit * travelled)
}

/// Minimum distance from `point` to the segment `line_start`–`line_end`.
pub fn point_segment_distance(
    point: &Array1<f64>,
    line_start: &Array1<f64>,
    line_end: &Array1<f64>,
) -> f64 {
    let p = Point::new(point[0], point[1]);
    let line = Line::new(
        Point::new(line_start[0], line_start[1]),
        Point::new(line_end[0], line_end[1]),
    );
    Euclidean.distance(&p, &line)
}
