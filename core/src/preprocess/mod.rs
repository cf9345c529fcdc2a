//! Segment preprocessing for a figure.
//!
//! Turns the named points and given segments of a figure into a catalogue of
//! every segment the figure implies:
//! 1. Find implicit points where given segments cross
//! 2. Split given segments at every interior point into minimal pieces
//! 3. Classify given segments as minimal or composite
//! 4. Collect minimal and composite segments into one lookup structure
//!
//! Each stage is a free function over the previous stage's output, so the
//! stages can be exercised one at a time. [`Preprocessor`] chains them.

pub mod catalogue;
pub mod implicit;

pub use catalogue::SegmentCatalogue;

use crate::config::PreprocessConfig;
use crate::error::FigureResult;
use crate::geometry::{IntersectionOracle, Point, Segment, SegmentIntersector, SegmentKey};
use crate::points::PointRegistry;
use std::collections::HashSet;
use std::iter;
use tracing::debug;


/// The preprocessed form of one figure. Read-only once built.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    points: Vec<Point>,
    given_segments: Vec<Segment>,
    implicit_points: Vec<Point>,
    implicit_segments: Vec<Segment>,
    minimal_segments: Vec<Segment>,
    non_minimal_segments: Vec<Segment>,
    catalogue: SegmentCatalogue,
}

impl Preprocessor {
    pub fn new(
        registry: &mut PointRegistry,
        given: impl IntoIterator<Item = Segment>,
    ) -> FigureResult<Self> {
        Self::with_config(registry, given, &PreprocessConfig::default())
    }

    pub fn with_config(
        registry: &mut PointRegistry,
        given: impl IntoIterator<Item = Segment>,
        config: &PreprocessConfig,
    ) -> FigureResult<Self> {
        Self::with_oracle(registry, given, &SegmentIntersector, config)
    }

    /// Runs every stage against `registry`.
    ///
    /// Endpoints of given segments and the discovered implicit points are
    /// registered, so afterwards the registry holds every point of the figure.
    /// On error the registry is left as it was.
    pub fn with_oracle<O: IntersectionOracle + ?Sized>(
        registry: &mut PointRegistry,
        given: impl IntoIterator<Item = Segment>,
        oracle: &O,
        config: &PreprocessConfig,
    ) -> FigureResult<Self> {
        config.validate()?;

        let mut staged = registry.clone();
        let given_segments = canonicalize_given(&mut staged, given)?;

        let implicit_points = implicit::compute_with(&staged, &given_segments, oracle, config)
            .into_iter()
            .map(|p| staged.register(p))
            .collect::<FigureResult<Vec<_>>>()?;
        debug!(
            given = given_segments.len(),
            implicit = implicit_points.len(),
            "implicit points registered"
        );

        // Every later stage sees the complete point set
        let points = staged.points().to_vec();
        *registry = staged;

        let implicit_segments = compute_implicit_base_segments(&given_segments, &points);
        let minimal_segments =
            identify_all_minimal_segments(&given_segments, &points, &implicit_segments);
        let non_minimal_segments =
            construct_all_non_minimal_segments(&given_segments, &minimal_segments);
        debug!(
            implicit_segments = implicit_segments.len(),
            minimal = minimal_segments.len(),
            non_minimal = non_minimal_segments.len(),
            "segments classified"
        );

        let catalogue = SegmentCatalogue::build(&minimal_segments, &non_minimal_segments);

        Ok(Self {
            points,
            given_segments,
            implicit_points,
            implicit_segments,
            minimal_segments,
            non_minimal_segments,
            catalogue,
        })
    }

    /// Every known point, explicit then implicit.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Given segments after deduplication, in input order.
    pub fn given_segments(&self) -> &[Segment] {
        &self.given_segments
    }

    pub fn implicit_points(&self) -> &[Point] {
        &self.implicit_points
    }

    pub fn implicit_segments(&self) -> &[Segment] {
        &self.implicit_segments
    }

    pub fn minimal_segments(&self) -> &[Segment] {
        &self.minimal_segments
    }

    pub fn non_minimal_segments(&self) -> &[Segment] {
        &self.non_minimal_segments
    }

    pub fn catalogue(&self) -> &SegmentCatalogue {
        &self.catalogue
    }
}

/// Rebuilds each given segment on canonical registry points and drops repeats.
///
/// From here on every segment sits on registry points, so [`Segment::key`]
/// identifies it.
fn canonicalize_given(
    registry: &mut PointRegistry,
    given: impl IntoIterator<Item = Segment>,
) -> FigureResult<Vec<Segment>> {
    let mut seen = HashSet::new();
    let mut segments = Vec::new();

    for segment in given {
        let (p1, p2) = segment.endpoints();
        let p1 = registry.register(p1.clone())?;
        let p2 = registry.register(p2.clone())?;
        let segment = Segment::new(p1, p2)?;
        if seen.insert(segment.key()) {
            segments.push(segment);
        }
    }

    Ok(segments)
}

/// Splits every given segment that has known points strictly inside it.
///
/// Pieces that are themselves given segments are not implicit and are left
/// out; the result is deduplicated and in discovery order.
pub fn compute_implicit_base_segments(given: &[Segment], points: &[Point]) -> Vec<Segment> {
    let given_keys: HashSet<SegmentKey> = given.iter().map(Segment::key).collect();
    let mut seen = HashSet::new();
    let mut implicit = Vec::new();

    for segment in given {
        let interior = segment.interior_points(points);
        if interior.is_empty() {
            continue;
        }
        for piece in break_segment_on_points(segment, &interior) {
            if given_keys.contains(&piece.key()) {
                continue;
            }
            if seen.insert(piece.key()) {
                implicit.push(piece);
            }
        }
    }

    implicit
}

/// Breaks `segment` at `mid_points` into the chain
/// `point1 -> m1 -> .. -> mk -> point2`.
///
/// Points not strictly inside the segment are ignored, and the rest are
/// ordered along it, so `k` interior points always give `k + 1` pieces.
pub fn break_segment_on_points(segment: &Segment, mid_points: &[Point]) -> Vec<Segment> {
    let interior = segment.interior_points(mid_points);
    let chain: Vec<&Point> = iter::once(segment.point1())
        .chain(interior.iter())
        .chain(iter::once(segment.point2()))
        .collect();

    chain
        .windows(2)
        .filter_map(|pair| Segment::new(pair[0].clone(), pair[1].clone()).ok())
        .collect()
}

/// A segment is minimal when no known point lies strictly between its endpoints.
pub fn is_minimal(segment: &Segment, points: &[Point]) -> bool {
    !points.iter().any(|p| segment.point_lies_between_endpoints(p))
}

/// Minimal given segments followed by every implicit segment.
pub fn identify_all_minimal_segments(
    given: &[Segment],
    points: &[Point],
    implicit_segments: &[Segment],
) -> Vec<Segment> {
    let mut seen = HashSet::new();
    given
        .iter()
        .filter(|s| is_minimal(s, points))
        .chain(implicit_segments.iter())
        .filter(|s| seen.insert(s.key()))
        .cloned()
        .collect()
}

/// Given segments that did not make it into the minimal set, kept whole.
pub fn construct_all_non_minimal_segments(given: &[Segment], minimal: &[Segment]) -> Vec<Segment> {
    let minimal: HashSet<SegmentKey> = minimal.iter().map(Segment::key).collect();
    given
        .iter()
        .filter(|s| !minimal.contains(&s.key()))
        .cloned()
        .collect()
}
