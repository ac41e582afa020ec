use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An axis-aligned rectangle described by its center, width and height.
///
/// Corner coordinates are derived from the center on demand; the area is
/// cached at construction and kept in sync by [`Rect::resize`]. Y grows
/// downward, so "top" is the smaller y and "bottom" the larger one.
///
/// # Examples
///
/// ```
/// use quadpoint_geom::{Point, Rect};
///
/// let rect = Rect::new(640.0, 480.0, Point::new(320.0, 240.0));
/// assert_eq!(rect.top_left_x(), 0.0);
/// assert_eq!(rect.bottom_right_y(), 480.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Full width of the rectangle.
    pub width: f64,
    /// Full height of the rectangle.
    pub height: f64,
    /// Center point of the rectangle.
    pub center: Point,
    area: f64,
}

impl Rect {
    /// Create a rectangle from its dimensions and center point.
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        Self {
            width,
            height,
            center,
            area: width * height,
        }
    }

    /// Cached area (`width * height`), computed at construction.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Change the dimensions in place, recomputing the cached area.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.area = width * height;
    }

    /// Move the center to an absolute position.
    pub fn move_center_to(&mut self, x: f64, y: f64) {
        self.center.x = x;
        self.center.y = y;
    }

    /// Translate the center by a delta.
    pub fn move_center_by(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    /// Whether all dimensions and the center are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.center.is_finite()
    }

    #[inline]
    pub fn top_left_x(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    #[inline]
    pub fn top_left_y(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    #[inline]
    pub fn top_right_x(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    #[inline]
    pub fn top_right_y(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom_left_x(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    #[inline]
    pub fn bottom_left_y(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    #[inline]
    pub fn bottom_right_x(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    #[inline]
    pub fn bottom_right_y(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// Whether two rectangles overlap, boundary touch included.
    ///
    /// Returns `false` only when one rectangle lies strictly outside the
    /// other on some axis.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.top_right_x() < other.top_left_x()
            || self.bottom_left_y() < other.top_left_y()
            || self.top_left_x() > other.top_right_x()
            || self.top_left_y() > other.bottom_left_y())
    }

    /// Whether the point lies inside this rectangle, all four edges
    /// inclusive, grown by `tolerance` on every side.
    #[inline]
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        point.x >= self.top_left_x() - tolerance
            && point.x <= self.top_right_x() + tolerance
            && point.y >= self.top_left_y() - tolerance
            && point.y <= self.bottom_left_y() + tolerance
    }
}
