//! 2D geometry utilities shared by the point and segment predicates.
//!
//! Everything here is a pure function over nalgebra points and vectors.
//! Tolerances come from [`EPSILON`] unless a caller passes its own.

use super::{Point2, Vector2, EPSILON};

// =============================================================================
// Point Operations
// =============================================================================

/// Compute distance between two 2D points.
#[inline]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    (p2 - p1).norm()
}

// =============================================================================
// Vector Operations
// =============================================================================

/// 2D cross product (z-component of 3D cross product).
/// Positive if v2 is counter-clockwise from v1.
#[inline]
pub fn cross_2d(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

// =============================================================================
// Line Operations
// =============================================================================

/// Find parameter t where point projects onto the line through `start` and `end`.
/// Returns t such that point ≈ start + t * (end - start).
/// t in [0,1] means projection is on segment.
pub fn project_point_on_line(start: &Point2, end: &Point2, point: &Point2) -> f64 {
    let d = end - start;
    let len_sq = d.norm_squared();

    if len_sq < EPSILON * EPSILON {
        return 0.0;
    }

    (point - start).dot(&d) / len_sq
}

/// Compute perpendicular distance from point to infinite line.
pub fn distance_point_to_line(line_start: &Point2, line_end: &Point2, point: &Point2) -> f64 {
    let d = line_end - line_start;
    let len = d.norm();

    if len < EPSILON {
        return distance(line_start, point);
    }

    (cross_2d(&d, &(point - line_start)) / len).abs()
}

/// Check whether `point` sits on the infinite line through `line_start` and `line_end`.
#[inline]
pub fn is_collinear(line_start: &Point2, line_end: &Point2, point: &Point2) -> bool {
    distance_point_to_line(line_start, line_end, point) < EPSILON
}

/// Parametric slack that corresponds to EPSILON of arc length on a line of `length`.
#[inline]
pub fn parameter_tolerance(length: f64) -> f64 {
    if length < EPSILON {
        0.0
    } else {
        EPSILON / length
    }
}
