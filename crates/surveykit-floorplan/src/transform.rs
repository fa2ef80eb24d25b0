//! Plan-to-screen coordinate transformation.
//!
//! Handles conversion between plan coordinates (design space, Y-up)
//! and screen coordinates (canvas pixels, Y-down). The base transform
//! is a uniform fit-to-canvas scale plus centering offset; the
//! user-controlled pan/zoom viewport layers on top of it and lives in
//! [`crate::viewport`].

use surveykit_core::geometry::{Point, Rect};

/// Fraction of the canvas the plan bounds are fitted into, leaving a
/// margin around the drawing.
pub const DEFAULT_FIT_FRACTION: f64 = 0.92;

/// A position on the rendering surface in pixels (Y-down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas center, the fixed point of viewport zooming.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width * 0.5, self.height * 0.5)
    }
}

/// A translation on the rendering surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenOffset {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenOffset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Base affine transform fitting plan bounds into a canvas: a uniform
/// scale plus a centering offset, with the Y axis flipped.
///
/// Recomputed whenever the canvas size or the plan bounds change;
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTransform {
    bounds: Rect,
    scale: f64,
    offset: ScreenPoint,
}

impl PlanTransform {
    /// Fits `bounds` into `size` with the default margin.
    ///
    /// Returns `None` when the bounds are degenerate (zero width or
    /// height) or the canvas is empty; callers must guard before
    /// rendering or hit-testing.
    pub fn fit(bounds: Rect, size: ScreenSize) -> Option<Self> {
        Self::fit_with_fraction(bounds, size, DEFAULT_FIT_FRACTION)
    }

    /// Fits with an explicit fit fraction (see [`DEFAULT_FIT_FRACTION`]).
    pub fn fit_with_fraction(bounds: Rect, size: ScreenSize, fit_fraction: f64) -> Option<Self> {
        let width = bounds.width();
        let height = bounds.height();
        if width <= 0.0 || height <= 0.0 || size.width <= 0.0 || size.height <= 0.0 {
            return None;
        }

        let scale = (size.width / width).min(size.height / height) * fit_fraction;
        let offset = ScreenPoint::new(
            (size.width - width * scale) * 0.5,
            (size.height - height * scale) * 0.5,
        );

        Some(Self {
            bounds,
            scale,
            offset,
        })
    }

    /// Plan units to pixels ratio of this transform.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The plan bounds this transform was fitted for.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Converts a plan point to screen space (Y flips from up to down).
    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            (point.x - self.bounds.min_x) * self.scale + self.offset.x,
            (self.bounds.max_y - point.y) * self.scale + self.offset.y,
        )
    }

    /// Converts a screen point back to plan space. Exact inverse of
    /// [`Self::to_screen`].
    pub fn to_plan(&self, point: ScreenPoint) -> Point {
        Point::new(
            (point.x - self.offset.x) / self.scale + self.bounds.min_x,
            self.bounds.max_y - (point.y - self.offset.y) / self.scale,
        )
    }
}
