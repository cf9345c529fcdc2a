use crate::error::{FigureError, FigureResult};
use crate::geometry::{Point, Point2, EPSILON};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Insertion-ordered set of canonical points, deduplicated by coordinate.
///
/// No two entries lie within EPSILON of each other and every name is unique.
/// Points handed out by the registry are the canonical instances; the
/// preprocessor only ever builds segments from them.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PointRegistry {
    points: Vec<Point>,
    by_name: HashMap<String, usize>,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers each point in order. A coordinate seen before keeps its first name.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> FigureResult<Self> {
        let mut registry = Self::new();
        for point in points {
            registry.register(point)?;
        }
        Ok(registry)
    }

    /// Finds the registered point nearest to `position` within `tolerance`
    /// on each axis.
    ///
    /// Ties on distance go to the earlier registration. More than one
    /// candidate means the figure is near-degenerate at this tolerance; the
    /// pick is still deterministic but it is reported.
    pub fn lookup(&self, position: &Point2, tolerance: f64) -> Option<&Point> {
        let mut best: Option<(&Point, f64)> = None;
        let mut candidates = 0usize;

        for point in &self.points {
            let p = point.position();
            if (p.x - position.x).abs() >= tolerance || (p.y - position.y).abs() >= tolerance {
                continue;
            }
            candidates += 1;
            let d = crate::geometry::dist_sq(&p, position);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((point, d)),
            }
        }

        if candidates > 1 {
            warn!(
                x = position.x,
                y = position.y,
                candidates,
                chosen = best.map(|(p, _)| p.name()).unwrap_or_default(),
                "ambiguous point lookup, picking nearest registered point"
            );
        }

        best.map(|(point, _)| point)
    }

    /// Lookup at the default EPSILON tolerance.
    pub fn get(&self, position: &Point2) -> Option<&Point> {
        self.lookup(position, EPSILON)
    }

    /// Returns the canonical point at `position`, registering it under `name`
    /// when the position is new.
    pub fn insert(&mut self, position: Point2, name: &str) -> FigureResult<Point> {
        if let Some(existing) = self.get(&position) {
            return Ok(existing.clone());
        }
        if self.by_name.contains_key(name) {
            return Err(FigureError::DuplicateName {
                name: name.to_string(),
            });
        }

        let point = Point::from_position(name, position);
        self.by_name.insert(name.to_string(), self.points.len());
        self.points.push(point.clone());
        Ok(point)
    }

    pub fn register(&mut self, point: Point) -> FigureResult<Point> {
        self.insert(point.position(), point.name())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Point> {
        self.by_name.get(name).map(|&idx| &self.points[idx])
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.get(&point.position()).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
