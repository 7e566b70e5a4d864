//! Points and rectangles in screen coordinates (y grows downwards)

use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, downwards
    pub y: f64,
}

impl Point {
    /// Create point
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move by a vector
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create rectangle
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle with zero area has not been laid out yet
    #[inline]
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Center point
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoints of the top, right, bottom and left edges
    #[must_use]
    pub fn edge_midpoints(&self) -> [Point; 4] {
        let center = self.center();
        [
            Point::new(center.x, self.y),
            Point::new(self.x + self.width, center.y),
            Point::new(center.x, self.y + self.height),
            Point::new(self.x, center.y),
        ]
    }

    /// Translate into the frame whose origin is `frame`'s top-left corner
    #[inline]
    #[must_use]
    pub fn relative_to(&self, frame: &Rect) -> Self {
        Self::new(self.x - frame.x, self.y - frame.y, self.width, self.height)
    }
}
