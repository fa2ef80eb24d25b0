//! 2D plan-space geometry utilities
//!
//! Room outlines are closed polygons in plan coordinates (arbitrary
//! real-valued units, Y-up). All operations here tolerate degenerate
//! input: an empty polygon has no bounds, a polygon with fewer than
//! three points contains nothing. Nothing in this module panics or
//! returns an error.

use serde::{Deserialize, Serialize};

/// Epsilon added to the edge Y-delta denominator in the ray-casting
/// containment test. Guards horizontal edges against division by zero
/// and fixes the tie-break behavior for taps on axis-aligned edges.
pub const CONTAINS_EPSILON: f64 = 1e-6;

/// A 2D coordinate in plan space (Y-up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box in plan space.
///
/// Degenerate rects (zero width or height) are valid values; callers
/// that cannot work with them (zoom-limit selection, transform
/// fitting) must check [`Rect::is_degenerate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center of the rect in plan coordinates.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// True when the rect has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// Computes the bounding box of a polygon, or `None` when it is empty.
pub fn bounds_of(polygon: &[Point]) -> Option<Rect> {
    let first = polygon.first()?;
    let mut bounds = Rect::new(first.x, first.y, first.x, first.y);

    for point in &polygon[1..] {
        bounds.min_x = bounds.min_x.min(point.x);
        bounds.min_y = bounds.min_y.min(point.y);
        bounds.max_x = bounds.max_x.max(point.x);
        bounds.max_y = bounds.max_y.max(point.y);
    }

    Some(bounds)
}

/// Tests whether a point lies inside a closed polygon ring using the
/// even-odd ray-casting rule.
///
/// The implicit closing edge (last point back to first) is included.
/// Polygons with fewer than three points contain nothing.
pub fn contains(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y + CONTAINS_EPSILON) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Compass bearing from `start` to `end` in degrees.
///
/// Measured clockwise from plan north (+Y): 0 degrees is due north,
/// 90 degrees is due east. Used at level-load time to orient the
/// north arrow.
pub fn compass_angle_degrees(start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    dx.atan2(dy).to_degrees()
}
