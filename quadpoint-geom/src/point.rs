use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// A point in screen space with an optional opaque identifier.
///
/// The identifier lets callers tie a point back to an external entity
/// (a sprite, a particle, a database row) without the index knowing
/// anything about it. It plays no part in any geometric predicate.
///
/// # Examples
///
/// ```
/// use quadpoint_geom::Point;
///
/// let anonymous = Point::new(10.0, 20.0);
/// let tagged = Point::with_id(10.0, 20.0, 42);
///
/// // Intersection compares coordinates only, the id is ignored.
/// assert!(anonymous.intersects(&tagged));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (grows to the right).
    pub x: f64,
    /// Y coordinate (grows downward, screen convention).
    pub y: f64,
    /// Optional opaque identifier attached by the caller.
    pub id: Option<u64>,
}

impl Point {
    /// Create a new point without an identifier.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, id: None }
    }

    /// Create a new point carrying an opaque identifier.
    pub fn with_id(x: f64, y: f64, id: u64) -> Self {
        Self { x, y, id: Some(id) }
    }

    /// Whether both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Exact coordinate equality with another point.
    ///
    /// Identifiers are ignored: two points at the same coordinates
    /// intersect even when tagged differently.
    #[inline]
    pub fn intersects(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Whether this point lies inside the rectangle, boundaries included.
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        rect.contains_point(self, 0.0)
    }
}
