//! Implicit point discovery.
//!
//! Given segments may cross at places the user never named. Every unordered
//! pair of given segments is intersected; crossings that the registry does not
//! already know become implicit points.

use crate::config::PreprocessConfig;
use crate::geometry::{IntersectionOracle, Point, Segment, SegmentIntersector, EPSILON};
use crate::points::{NameGenerator, PointRegistry};
use tracing::trace;

/// Implicit points with the default oracle and configuration.
pub fn compute(registry: &PointRegistry, given: &[Segment]) -> Vec<Point> {
    compute_with(registry, given, &SegmentIntersector, &PreprocessConfig::default())
}

/// Finds every intersection of two given segments that is not a registered point.
///
/// Results are in discovery order, pair `(i, j)` with `i < j` scanned
/// row by row, and deduplicated by coordinate. Each point gets a fresh
/// synthetic name. The registry is only read.
///
/// The lookup tolerance is raised to at least EPSILON, so nothing returned
/// here would be merged into an existing point on registration.
pub fn compute_with<O: IntersectionOracle + ?Sized>(
    registry: &PointRegistry,
    given: &[Segment],
    oracle: &O,
    config: &PreprocessConfig,
) -> Vec<Point> {
    let mut implicit: Vec<Point> = Vec::new();
    let mut namer = NameGenerator::new(config.implicit_prefix.clone());
    let tolerance = config.lookup_tolerance.max(EPSILON);

    for i in 0..given.len() {
        for j in (i + 1)..given.len() {
            let Some(hit) = oracle.intersect(&given[i], &given[j]) else {
                continue;
            };
            if registry.lookup(&hit, tolerance).is_some() {
                continue;
            }
            let candidate = Point::unnamed(hit);
            if implicit.contains(&candidate) {
                continue;
            }

            let point = Point::from_position(namer.next_name(registry), hit);
            trace!(point = %point, first = %given[i], second = %given[j], "implicit point");
            implicit.push(point);
        }
    }

    implicit
}
