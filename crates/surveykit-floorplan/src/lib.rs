//! # SurveyKit Floorplan
//!
//! Floor-plan viewport and room hit-testing for SurveyKit.
//! Provides the plan-to-screen transform, user pan/zoom with
//! geometry-derived zoom limits, drag/tap disambiguation, room
//! hit-testing, and focus/reset camera transitions. Rendering and
//! gesture recognition stay in the host UI; this crate only turns
//! recognized gestures into viewport state and room identifiers.

pub mod controller;
pub mod transform;
pub mod viewport;

pub use controller::{
    DragEnd, Easing, FloorplanRoom, MapController, PlanMode, ViewportTransition,
};

pub use transform::{PlanTransform, ScreenOffset, ScreenPoint, ScreenSize};

pub use viewport::{compute_zoom_bounds, FloorplanTuning, Viewport, ZoomBounds};
