use super::{utils_2d, ApproxEq, Point2, EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder name for points produced by computation before anyone names them.
pub const UNNAMED: &str = "__UNNAMED";

/// An immutable, named location in the figure.
///
/// Equality is coordinate-based within [`EPSILON`]; names never take part in it,
/// so `A(1, 2)` and `*_B(1, 2)` are the same point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    name: String,
    position: Point2,
}

impl Point {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self::from_position(name, Point2::new(x, y))
    }

    pub fn from_position(name: impl Into<String>, position: Point2) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// A point with no user-facing name, e.g. a raw intersection result.
    pub fn unnamed(position: Point2) -> Self {
        Self::from_position(UNNAMED, position)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Quantized identity used when points (or segments) need hashing.
    pub fn key(&self) -> PointKey {
        PointKey::of(&self.position)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        utils_2d::distance(&self.position, &other.position)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.position.approx_eq(&other.position)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.name, self.position.x, self.position.y)
    }
}

/// A position snapped onto the EPSILON grid.
///
/// Two registry-issued points share a key exactly when they are the same
/// canonical point, which is what hashed segment collections rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointKey(pub i64, pub i64);

impl PointKey {
    pub fn of(position: &Point2) -> Self {
        Self(
            (position.x / EPSILON).round() as i64,
            (position.y / EPSILON).round() as i64,
        )
    }
}
