//! Map controller: gesture handling, hit-testing, and camera moves.
//!
//! Owns the one piece of mutable state in the floor-plan core, the
//! [`Viewport`], and funnels every mutation through its methods. It is
//! driven synchronously by the host's UI event loop: gesture
//! callbacks, taps, and focus/reset commands. There is no background
//! work and no locking; the controller is plain `&mut self`.
//!
//! Animations are fire-and-forget: focus and reset return a
//! [`ViewportTransition`] describing target values and a duration,
//! and the host's animation primitive performs the interpolation. A
//! newer transition simply overwrites the previous target.

use tracing::{debug, trace};
use uuid::Uuid;

use surveykit_core::geometry::{bounds_of, contains, Point, Rect};

use crate::transform::{PlanTransform, ScreenOffset, ScreenPoint, ScreenSize};
use crate::viewport::{compute_zoom_bounds, FloorplanTuning, Viewport, ZoomBounds};

/// UI mode within the planimetric workflow. The floor plan stays
/// mounted across both modes; only the camera and overlay chrome
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Default mode: the user navigates the floor plan.
    Browse,
    /// A room is selected and the camera frames it.
    Room(Uuid),
}

impl PlanMode {
    pub fn selected_room_id(&self) -> Option<Uuid> {
        match self {
            Self::Browse => None,
            Self::Room(id) => Some(*id),
        }
    }
}

/// Room input to the controller: identifier plus outline, handed over
/// as plain data by the collaborator layer on level selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorplanRoom {
    pub id: Uuid,
    pub polygon: Vec<Point>,
    pub label_point: Option<Point>,
}

/// Easing curve for a viewport transition, mapped by the host onto
/// its animation primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

/// A camera move for the host to animate. The controller has already
/// committed `target` as its state; the transition only describes how
/// to get there visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransition {
    pub target: Viewport,
    pub duration_secs: f64,
    pub easing: Easing,
}

/// How a completed drag gesture was classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEnd {
    /// The drag moved the viewport; the pan is committed.
    Pan,
    /// Displacement stayed under the tap threshold: the pan was rolled
    /// back and the release position hit-tested.
    Tap(Option<Uuid>),
}

/// Controller for floor-plan interactions: maps gestures to viewport
/// updates, taps to room identifiers, and room selections to camera
/// moves.
#[derive(Debug)]
pub struct MapController {
    tuning: FloorplanTuning,
    viewport: Viewport,
    pre_focus_viewport: Option<Viewport>,
    rooms: Vec<FloorplanRoom>,
    bounds: Option<Rect>,
    // Gesture-start baselines. Pan deltas and zoom factors are always
    // interpreted against these, not frame-to-frame, so intermediate
    // updates cannot drift. Tracked independently because the host
    // may interleave simultaneous pan and zoom callbacks.
    pan_baseline: ScreenOffset,
    zoom_baseline: f64,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new(FloorplanTuning::default())
    }
}

impl MapController {
    pub fn new(tuning: FloorplanTuning) -> Self {
        Self {
            tuning,
            viewport: Viewport::default(),
            pre_focus_viewport: None,
            rooms: Vec::new(),
            bounds: None,
            pan_baseline: ScreenOffset::default(),
            zoom_baseline: 1.0,
        }
    }

    /// Replaces rooms and plan bounds when the active level changes.
    /// The viewport is reset immediately; animating across levels
    /// would frame unrelated geometry.
    pub fn configure(&mut self, rooms: Vec<FloorplanRoom>, bounds: Option<Rect>) {
        debug!(rooms = rooms.len(), "configuring floor plan");
        self.rooms = rooms;
        self.bounds = bounds;
        self.reset_viewport_immediate();
    }

    /// Current viewport, read by the renderer every frame.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rooms(&self) -> &[FloorplanRoom] {
        &self.rooms
    }

    /// Base fit transform for the current bounds, or `None` while the
    /// level has no usable bounds.
    pub fn base_transform(&self, canvas: ScreenSize) -> Option<PlanTransform> {
        PlanTransform::fit_with_fraction(self.bounds?, canvas, self.tuning.fit_fraction)
    }

    /// Zoom limits for the current level and canvas.
    pub fn zoom_bounds(&self, canvas: ScreenSize) -> ZoomBounds {
        let defaults = ZoomBounds {
            min: self.tuning.min_zoom,
            max: self.tuning.default_max_zoom,
        };
        let Some(transform) = self.base_transform(canvas) else {
            return defaults;
        };
        let polygons = self.rooms.iter().map(|room| room.polygon.as_slice());
        compute_zoom_bounds(polygons, &transform, canvas, &self.tuning)
    }

    // --- Gestures ---

    /// Applies an in-flight drag: offset = gesture-start baseline plus
    /// the total translation reported by the host.
    pub fn pan_changed(&mut self, translation: ScreenOffset) {
        self.viewport.offset = ScreenOffset::new(
            self.pan_baseline.dx + translation.dx,
            self.pan_baseline.dy + translation.dy,
        );
    }

    /// Finishes a drag. Displacement under the tap threshold on both
    /// axes is reclassified as a tap: the offset rolls back to the
    /// gesture-start baseline and the release location is hit-tested.
    pub fn pan_ended(
        &mut self,
        translation: ScreenOffset,
        location: ScreenPoint,
        canvas: ScreenSize,
    ) -> DragEnd {
        let threshold = self.tuning.tap_threshold;
        let is_tap = translation.dx.abs() < threshold && translation.dy.abs() < threshold;
        if is_tap {
            self.viewport.offset = self.pan_baseline;
            let hit = self.hit_test(location, canvas);
            trace!(?hit, "drag classified as tap");
            DragEnd::Tap(hit)
        } else {
            self.pan_baseline = self.viewport.offset;
            DragEnd::Pan
        }
    }

    /// Applies an in-flight magnification: scale = gesture-start
    /// baseline times the factor, clamped to the zoom limits.
    pub fn zoom_changed(&mut self, factor: f64, canvas: ScreenSize) {
        let bounds = self.zoom_bounds(canvas);
        self.viewport.scale = bounds.clamp(self.zoom_baseline * factor);
    }

    /// Commits the current scale as the next gesture's baseline.
    pub fn zoom_ended(&mut self) {
        self.zoom_baseline = self.viewport.scale;
    }

    // --- Hit testing ---

    /// Maps a screen tap to the room containing it, or `None`.
    ///
    /// Undoes the viewport pan/zoom about the canvas center, converts
    /// through the base transform into plan space, and scans rooms in
    /// input order; the first containing polygon wins, which keeps
    /// overlap resolution deterministic.
    pub fn hit_test(&self, location: ScreenPoint, canvas: ScreenSize) -> Option<Uuid> {
        let transform = self.base_transform(canvas)?;
        let center = canvas.center();
        let scale = self.viewport.scale.max(self.tuning.zoom_epsilon);

        let adjusted = ScreenPoint::new(
            (location.x - self.viewport.offset.dx - center.x) / scale + center.x,
            (location.y - self.viewport.offset.dy - center.y) / scale + center.y,
        );
        let plan_point = transform.to_plan(adjusted);

        self.rooms
            .iter()
            .find(|room| contains(plan_point, &room.polygon))
            .map(|room| room.id)
    }

    // --- Camera moves ---

    /// Frames a room within the canvas area left free by overlay
    /// chrome: full width, height minus the top and bottom insets.
    ///
    /// Saves the current viewport for restoration on exit, commits the
    /// target, and returns the transition for the host to animate.
    /// Returns `None` when the room or the plan bounds are degenerate.
    pub fn focus_on_room(
        &mut self,
        room_id: Uuid,
        canvas: ScreenSize,
        top_inset: f64,
        bottom_inset: f64,
    ) -> Option<ViewportTransition> {
        let transform = self.base_transform(canvas)?;
        let room = self.rooms.iter().find(|room| room.id == room_id)?;
        let room_bounds = bounds_of(&room.polygon)?;

        let room_width = room_bounds.width() * transform.scale();
        let room_height = room_bounds.height() * transform.scale();
        if room_width <= 0.0 || room_height <= 0.0 {
            return None;
        }

        let available_width = canvas.width;
        let available_height = (canvas.height - top_inset - bottom_inset).max(1.0);

        let zoom_bounds = self.zoom_bounds(canvas);
        let target_scale = zoom_bounds.clamp(
            (available_width / room_width).min(available_height / room_height)
                * self.tuning.focus_padding,
        );

        // Center the room at the vertical center of the inset region,
        // not of the full canvas.
        let base_center = transform.to_screen(room_bounds.center());
        let view_center = canvas.center();
        let desired_center =
            ScreenPoint::new(view_center.x, top_inset + available_height * 0.5);

        let target_offset = ScreenOffset::new(
            desired_center.x - (view_center.x + (base_center.x - view_center.x) * target_scale),
            desired_center.y - (view_center.y + (base_center.y - view_center.y) * target_scale),
        );

        self.pre_focus_viewport = Some(self.viewport);
        let target = Viewport {
            scale: target_scale,
            offset: target_offset,
        };
        self.commit(target);

        debug!(%room_id, scale = target_scale, "focusing room");
        Some(self.transition_to(target))
    }

    /// Returns to the browse camera: the pre-focus viewport when
    /// available and requested, otherwise the identity viewport.
    pub fn reset_viewport(&mut self, restore_previous: bool) -> ViewportTransition {
        let target = if restore_previous {
            self.pre_focus_viewport.unwrap_or_default()
        } else {
            Viewport::default()
        };
        self.pre_focus_viewport = None;
        self.commit(target);
        self.transition_to(target)
    }

    /// Sets the identity viewport with no transition; used on level
    /// changes.
    pub fn reset_viewport_immediate(&mut self) {
        self.pre_focus_viewport = None;
        self.commit(Viewport::default());
    }

    fn commit(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.pan_baseline = viewport.offset;
        self.zoom_baseline = viewport.scale;
    }

    fn transition_to(&self, target: Viewport) -> ViewportTransition {
        ViewportTransition {
            target,
            duration_secs: self.tuning.focus_duration_secs,
            easing: Easing::EaseOut,
        }
    }
}
