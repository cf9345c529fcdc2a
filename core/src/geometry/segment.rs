//! Segments between two distinct points and the geometric predicates the
//! preprocessor builds on.
//!
//! All predicates are tolerance based: "collinear" means the perpendicular
//! distance to the supporting line is below [`EPSILON`](super::EPSILON), and parametric
//! bounds are widened by the parameter span of EPSILON along the segment.

use super::point::PointKey;
use super::{utils_2d, Point, Point2, Vector2};
use crate::error::{FigureError, FigureResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint keys of a segment, smaller key first.
///
/// Only meaningful for segments built on canonical registry points: two such
/// segments share a key exactly when they are equal.
pub type SegmentKey = (PointKey, PointKey);

/// An unordered pair of distinct points.
///
/// `Segment::new(a, b) == Segment::new(b, a)`: equality matches endpoints as
/// tolerant points in either order. The stored order only matters
/// as the reference direction for [`Segment::parameter_of`] and ordered
/// point collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    point1: Point,
    point2: Point,
}

impl Segment {
    /// Build a segment, rejecting coincident endpoints.
    pub fn new(point1: Point, point2: Point) -> FigureResult<Self> {
        if point1 == point2 {
            return Err(FigureError::DegenerateSegment {
                first: point1.name().to_string(),
                second: point2.name().to_string(),
            });
        }
        Ok(Self { point1, point2 })
    }

    pub fn point1(&self) -> &Point {
        &self.point1
    }

    pub fn point2(&self) -> &Point {
        &self.point2
    }

    pub fn endpoints(&self) -> (&Point, &Point) {
        (&self.point1, &self.point2)
    }

    pub fn direction(&self) -> Vector2 {
        self.point2.position() - self.point1.position()
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.point1.position(), &self.point2.position())
    }

    pub fn has_endpoint(&self, p: &Point) -> bool {
        self.point1 == *p || self.point2 == *p
    }

    /// The endpoint opposite `p`, or `None` if `p` is not an endpoint.
    pub fn other_endpoint(&self, p: &Point) -> Option<&Point> {
        if self.point1 == *p {
            Some(&self.point2)
        } else if self.point2 == *p {
            Some(&self.point1)
        } else {
            None
        }
    }

    /// Position of `p` projected onto the supporting line: 0 at `point1`, 1 at `point2`.
    pub fn parameter_of(&self, p: &Point) -> f64 {
        utils_2d::project_point_on_line(
            &self.point1.position(),
            &self.point2.position(),
            &p.position(),
        )
    }

    pub fn is_collinear_with_point(&self, p: &Point) -> bool {
        utils_2d::is_collinear(
            &self.point1.position(),
            &self.point2.position(),
            &p.position(),
        )
    }

    /// Both segments lie on the same line.
    pub fn is_collinear_with(&self, other: &Segment) -> bool {
        self.is_collinear_with_point(&other.point1) && self.is_collinear_with_point(&other.point2)
    }

    /// `p` lies on the closed segment (endpoints included).
    pub fn point_lies_on(&self, p: &Point) -> bool {
        if !self.is_collinear_with_point(p) {
            return false;
        }
        let t = self.parameter_of(p);
        let slack = utils_2d::parameter_tolerance(self.length());
        t > -slack && t < 1.0 + slack
    }

    /// `p` lies strictly between the endpoints; the endpoints themselves never do.
    pub fn point_lies_between_endpoints(&self, p: &Point) -> bool {
        self.point_lies_on(p) && !self.has_endpoint(p)
    }

    /// Both endpoints of `candidate` lie on this segment. `None` is never a sub-segment.
    pub fn has_sub_segment(&self, candidate: Option<&Segment>) -> bool {
        match candidate {
            Some(candidate) => {
                self.point_lies_on(&candidate.point1) && self.point_lies_on(&candidate.point2)
            }
            None => false,
        }
    }

    /// For two segments on the same line: their closed extents meet in at most
    /// one point. Overlapping interiors, segments on different lines and `None`
    /// all give `false`.
    pub fn coincide_without_overlap(&self, that: Option<&Segment>) -> bool {
        let Some(that) = that else {
            return false;
        };
        if !self.is_collinear_with(that) {
            return false;
        }

        let t1 = self.parameter_of(&that.point1);
        let t2 = self.parameter_of(&that.point2);
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        let overlap = hi.min(1.0) - lo.max(0.0);
        overlap <= utils_2d::parameter_tolerance(self.length())
    }

    /// The points of `points` lying on the closed segment, ordered from
    /// `point1` to `point2` and deduplicated. The input is left untouched;
    /// `None` is rejected rather than treated as empty.
    pub fn collect_ordered_points_on_segment(
        &self,
        points: Option<&[Point]>,
    ) -> FigureResult<Vec<Point>> {
        let points = points.ok_or(FigureError::MissingInput("points"))?;
        Ok(self.ordered(points.iter().filter(|p| self.point_lies_on(p))))
    }

    /// The points of `points` strictly between the endpoints, ordered from `point1`.
    pub fn interior_points(&self, points: &[Point]) -> Vec<Point> {
        self.ordered(points.iter().filter(|p| self.point_lies_between_endpoints(p)))
    }

    fn ordered<'a>(&self, points: impl Iterator<Item = &'a Point>) -> Vec<Point> {
        let mut ordered: Vec<Point> = points.cloned().collect();
        ordered.sort_by(|a, b| self.parameter_of(a).total_cmp(&self.parameter_of(b)));
        ordered.dedup_by(|a, b| a == b);
        ordered
    }

    pub fn key(&self) -> SegmentKey {
        let (k1, k2) = (self.point1.key(), self.point2.key());
        if k1 <= k2 {
            (k1, k2)
        } else {
            (k2, k1)
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.point1 == other.point1 && self.point2 == other.point2)
            || (self.point1 == other.point2 && self.point2 == other.point1)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.point1, self.point2)
    }
}
