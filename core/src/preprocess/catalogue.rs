use crate::geometry::{Point, Segment, SegmentKey};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CatalogueEntry {
    segment: Segment,
    minimal: bool,
}

/// Every minimal segment of a figure plus the composite segments the user drew.
///
/// Acts as a `Segment -> Segment` map: looking up any segment whose endpoints
/// equal a stored pair returns the one stored instance. Iteration follows
/// insertion order, minimal entries first.
#[derive(Debug, Clone, Default)]
pub struct SegmentCatalogue {
    entries: Vec<CatalogueEntry>,
    /// Distinct endpoints of all entries, in first-seen order.
    points: Vec<Point>,
    index: HashMap<SegmentKey, usize>,
}

impl SegmentCatalogue {
    pub(crate) fn build(minimal: &[Segment], non_minimal: &[Segment]) -> Self {
        let mut catalogue = Self::default();
        for segment in minimal {
            catalogue.insert(segment.clone(), true);
        }
        for segment in non_minimal {
            catalogue.insert(segment.clone(), false);
        }
        catalogue
    }

    fn insert(&mut self, segment: Segment, minimal: bool) -> bool {
        if self.position(&segment).is_some() {
            return false;
        }
        let (a, b) = segment.endpoints();
        let p1 = self.canonical_point(a).cloned().unwrap_or_else(|| a.clone());
        let p2 = self.canonical_point(b).cloned().unwrap_or_else(|| b.clone());
        for p in [&p1, &p2] {
            if self.canonical_point(p).is_none() {
                self.points.push(p.clone());
            }
        }

        // Stored on canonical endpoints so keys of equal segments agree
        let segment = Segment::new(p1, p2).unwrap_or(segment);
        self.index.insert(segment.key(), self.entries.len());
        self.entries.push(CatalogueEntry { segment, minimal });
        true
    }

    fn canonical_point(&self, p: &Point) -> Option<&Point> {
        self.points.iter().find(|known| *known == p)
    }

    /// Entry index of `segment`, matching endpoints within tolerance.
    fn position(&self, segment: &Segment) -> Option<usize> {
        let (a, b) = segment.endpoints();
        let canonical =
            Segment::new(self.canonical_point(a)?.clone(), self.canonical_point(b)?.clone()).ok()?;
        self.index.get(&canonical.key()).copied()
    }

    /// The stored instance with the same endpoints as `segment`.
    pub fn get(&self, segment: &Segment) -> Option<&Segment> {
        self.position(segment).map(|idx| &self.entries[idx].segment)
    }

    pub fn contains(&self, segment: &Segment) -> bool {
        self.position(segment).is_some()
    }

    pub fn is_minimal(&self, segment: &Segment) -> bool {
        self.position(segment)
            .map(|idx| self.entries[idx].minimal)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().map(|e| &e.segment)
    }

    pub fn minimal(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().filter(|e| e.minimal).map(|e| &e.segment)
    }

    pub fn non_minimal(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().filter(|e| !e.minimal).map(|e| &e.segment)
    }

    /// Distinct endpoints of all entries, in first-seen order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The chain of minimal segments that runs from `target.point1()` to
    /// `target.point2()` without gaps, in that order.
    ///
    /// A minimal segment is its own chain. `None` when the endpoints are not
    /// connected by minimal segments along the target's line.
    pub fn decompose(&self, target: &Segment) -> Option<Vec<Segment>> {
        if self.is_minimal(target) {
            return self.get(target).map(|s| vec![s.clone()]);
        }

        let mut chain: Vec<Segment> = Vec::new();
        let mut current = target.point1().clone();

        // Minimal segments on one line never overlap, so from each point there
        // is at most one unused piece that stays inside the target.
        while current != *target.point2() {
            let next = self.minimal().find(|m| {
                m.has_endpoint(&current) && target.has_sub_segment(Some(*m)) && !chain.contains(*m)
            })?;
            current = next.other_endpoint(&current)?.clone();
            chain.push(next.clone());
        }

        Some(chain)
    }

    /// Every segment between two catalogue points that is made of two or more
    /// collinear minimal segments, drawn by the user or not.
    pub fn all_composite_segments(&self) -> Vec<Segment> {
        let points = self.points();
        let mut composites = Vec::new();

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let Ok(candidate) = Segment::new(points[i].clone(), points[j].clone()) else {
                    continue;
                };
                if self.is_minimal(&candidate) {
                    continue;
                }
                if let Some(chain) = self.decompose(&candidate) {
                    if chain.len() >= 2 {
                        composites.push(self.get(&candidate).cloned().unwrap_or(candidate));
                    }
                }
            }
        }

        composites
    }
}
