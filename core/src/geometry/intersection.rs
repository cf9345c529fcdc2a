//! 2D segment intersection for figure geometry

use super::{utils_2d, Point2, Segment};

/// Below this the two direction vectors are treated as parallel.
const PARALLEL_THRESHOLD: f64 = 1e-10;

/// Answers "where do these two segments meet?".
///
/// Implementations must be pure: the same pair always gives the same answer,
/// and the answer must lie within both segments' extents.
pub trait IntersectionOracle {
    fn intersect(&self, a: &Segment, b: &Segment) -> Option<Point2>;
}

/// The default oracle: a single crossing point of two non-parallel segments.
///
/// Parallel and collinear pairs never intersect here, even when they overlap;
/// overlapping collinear segments are handled by the betweenness predicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentIntersector;

impl IntersectionOracle for SegmentIntersector {
    fn intersect(&self, a: &Segment, b: &Segment) -> Option<Point2> {
        let (a1, a2) = a.endpoints();
        let (b1, b2) = b.endpoints();
        line_line_intersection(
            a1.position(),
            a2.position(),
            b1.position(),
            b2.position(),
        )
    }
}

/// Calculate intersection point of two 2D line segments.
/// Returns Some(point) if segments intersect, None otherwise.
///
/// Uses parametric line representation: P = P0 + t*(P1-P0)
/// where t in [0,1] for the segment, widened by EPSILON of arc length so
/// that shared endpoints are still reported.
pub fn line_line_intersection(
    l1_start: Point2, l1_end: Point2,
    l2_start: Point2, l2_end: Point2,
) -> Option<Point2> {
    let d1 = l1_end - l1_start;
    let d2 = l2_end - l2_start;

    // Cross product of direction vectors (2D determinant)
    let cross = utils_2d::cross_2d(&d1, &d2);

    // Parallel or coincident lines
    if cross.abs() < PARALLEL_THRESHOLD {
        return None;
    }

    // Vector from L1 start to L2 start
    let d = l2_start - l1_start;

    // Parameter t for L1: intersection = L1_start + t * (L1_end - L1_start)
    let t = utils_2d::cross_2d(&d, &d2) / cross;
    // Parameter s for L2
    let s = utils_2d::cross_2d(&d, &d1) / cross;

    let t_slack = utils_2d::parameter_tolerance(d1.norm());
    let s_slack = utils_2d::parameter_tolerance(d2.norm());

    let within = |u: f64, slack: f64| u >= -slack && u <= 1.0 + slack;
    if within(t, t_slack) && within(s, s_slack) {
        Some(l1_start + d1 * t)
    } else {
        None
    }
}
