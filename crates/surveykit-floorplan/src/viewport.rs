//! Viewport state and zoom limits.
//!
//! The viewport is the user-controlled pan/zoom layered on top of the
//! base [`PlanTransform`](crate::transform::PlanTransform). Zooming is
//! applied about the canvas center; panning is a plain pixel offset.
//! Zoom limits are derived from the smallest room on the level: once
//! that room fills the canvas, zooming further is not useful.

use surveykit_core::geometry::{bounds_of, Point};

use crate::transform::{PlanTransform, ScreenOffset, ScreenSize};

/// Empirical UI constants for the floor-plan viewport. These are
/// tunable configuration, not invariants; the defaults match the
/// behavior the field app shipped with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorplanTuning {
    /// Fit margin applied by the base transform.
    pub fit_fraction: f64,
    /// Lower zoom limit, in multiples of the base fit.
    pub min_zoom: f64,
    /// Upper zoom limit used when no room qualifies for the
    /// smallest-room rule.
    pub default_max_zoom: f64,
    /// Padding applied when framing a focused room.
    pub focus_padding: f64,
    /// Maximum drag displacement (pixels, per axis) still counted as
    /// a tap.
    pub tap_threshold: f64,
    /// Floor for the viewport scale divisor during hit-testing.
    pub zoom_epsilon: f64,
    /// Duration of focus/reset transitions, in seconds.
    pub focus_duration_secs: f64,
}

impl Default for FloorplanTuning {
    fn default() -> Self {
        Self {
            fit_fraction: crate::transform::DEFAULT_FIT_FRACTION,
            min_zoom: 1.0,
            default_max_zoom: 5.0,
            focus_padding: 0.9,
            tap_threshold: 4.0,
            zoom_epsilon: 1e-4,
            focus_duration_secs: 0.4,
        }
    }
}

/// User pan/zoom on top of the base transform. Scale 1.0 with zero
/// offset shows the plain fit-to-canvas view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub offset: ScreenOffset,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: ScreenOffset::default(),
        }
    }
}

/// Allowed zoom scale range for the current level and canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// Derives zoom limits from the smallest room on the level.
///
/// Among rooms with a non-degenerate bounding box, the one with the
/// smallest area (first wins on ties) defines the maximum zoom: the
/// scale at which it fills the canvas. Degenerate input never errors;
/// it falls back to the default limits.
///
/// Polygons are borrowed; this runs on every zoom gesture frame and
/// must not allocate.
pub fn compute_zoom_bounds<'a, I>(
    room_polygons: I,
    transform: &PlanTransform,
    canvas: ScreenSize,
    tuning: &FloorplanTuning,
) -> ZoomBounds
where
    I: IntoIterator<Item = &'a [Point]>,
{
    let defaults = ZoomBounds {
        min: tuning.min_zoom,
        max: tuning.default_max_zoom,
    };

    let mut smallest = None;
    let mut smallest_area = f64::INFINITY;
    for polygon in room_polygons {
        let Some(bounds) = bounds_of(polygon) else {
            continue;
        };
        if bounds.is_degenerate() {
            continue;
        }
        if bounds.area() < smallest_area {
            smallest_area = bounds.area();
            smallest = Some(bounds);
        }
    }

    let Some(bounds) = smallest else {
        return defaults;
    };

    let room_width = bounds.width() * transform.scale();
    let room_height = bounds.height() * transform.scale();
    if room_width <= 0.0 || room_height <= 0.0 {
        return defaults;
    }

    let max_zoom_x = canvas.width / room_width;
    let max_zoom_y = canvas.height / room_height;
    ZoomBounds {
        min: tuning.min_zoom,
        max: tuning.min_zoom.max(max_zoom_x.min(max_zoom_y)),
    }
}
