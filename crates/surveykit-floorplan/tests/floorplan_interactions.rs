//! Controller-level tests: hit-testing through the combined transform,
//! focus framing, and reset behavior.

use surveykit_core::geometry::{Point, Rect};
use surveykit_floorplan::{
    DragEnd, Easing, FloorplanRoom, MapController, ScreenOffset, ScreenPoint, ScreenSize, Viewport,
};
use uuid::Uuid;

const CANVAS: ScreenSize = ScreenSize {
    width: 800.0,
    height: 600.0,
};

fn square_room(id: Uuid, min_x: f64, min_y: f64, side: f64) -> FloorplanRoom {
    FloorplanRoom {
        id,
        polygon: vec![
            Point::new(min_x, min_y),
            Point::new(min_x + side, min_y),
            Point::new(min_x + side, min_y + side),
            Point::new(min_x, min_y + side),
        ],
        label_point: None,
    }
}

/// Controller with a 40x25 plan and two rooms: a 10x10 at the origin
/// and a 4x4 at (20, 10).
fn setup() -> (MapController, Uuid, Uuid) {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let mut controller = MapController::default();
    controller.configure(
        vec![square_room(a, 0.0, 0.0, 10.0), square_room(b, 20.0, 10.0, 4.0)],
        Some(Rect::new(0.0, 0.0, 40.0, 25.0)),
    );
    (controller, a, b)
}

/// Screen position of a plan point under the base transform plus the
/// current viewport, mirroring what the renderer draws.
fn screen_position(controller: &MapController, plan_point: Point) -> ScreenPoint {
    let transform = controller.base_transform(CANVAS).unwrap();
    let base = transform.to_screen(plan_point);
    let viewport = controller.viewport();
    let center = CANVAS.center();
    ScreenPoint::new(
        center.x + (base.x - center.x) * viewport.scale + viewport.offset.dx,
        center.y + (base.y - center.y) * viewport.scale + viewport.offset.dy,
    )
}

#[test]
fn test_hit_test_at_default_view() {
    let (controller, a, b) = setup();

    let tap_a = screen_position(&controller, Point::new(5.0, 5.0));
    assert_eq!(controller.hit_test(tap_a, CANVAS), Some(a));

    let tap_b = screen_position(&controller, Point::new(22.0, 12.0));
    assert_eq!(controller.hit_test(tap_b, CANVAS), Some(b));

    let tap_outside = screen_position(&controller, Point::new(15.0, 20.0));
    assert_eq!(controller.hit_test(tap_outside, CANVAS), None);
}

#[test]
fn test_hit_test_tracks_pan_and_zoom() {
    let (mut controller, a, _) = setup();

    controller.pan_changed(ScreenOffset::new(57.0, -23.0));
    controller.zoom_changed(1.7, CANVAS);

    // The same plan point, wherever the viewport moved it, still
    // resolves to its room.
    let tap = screen_position(&controller, Point::new(5.0, 5.0));
    assert_eq!(controller.hit_test(tap, CANVAS), Some(a));
}

#[test]
fn test_hit_test_without_bounds_is_none() {
    let mut controller = MapController::default();
    controller.configure(vec![square_room(Uuid::new_v4(), 0.0, 0.0, 10.0)], None);
    assert_eq!(
        controller.hit_test(ScreenPoint::new(100.0, 100.0), CANVAS),
        None
    );
}

#[test]
fn test_overlapping_rooms_resolve_to_first_in_order() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let mut controller = MapController::default();
    controller.configure(
        vec![
            square_room(first, 0.0, 0.0, 10.0),
            square_room(second, 0.0, 0.0, 10.0),
        ],
        Some(Rect::new(0.0, 0.0, 40.0, 25.0)),
    );

    let tap = screen_position(&controller, Point::new(5.0, 5.0));
    assert_eq!(controller.hit_test(tap, CANVAS), Some(first));
}

#[test]
fn test_tap_gesture_resolves_room() {
    let (mut controller, a, _) = setup();

    let tap = screen_position(&controller, Point::new(5.0, 5.0));
    controller.pan_changed(ScreenOffset::new(2.0, 1.0));
    let end = controller.pan_ended(ScreenOffset::new(2.0, 1.0), tap, CANVAS);

    assert_eq!(end, DragEnd::Tap(Some(a)));
    // The sub-threshold pan must not leave a residual offset behind
    assert_eq!(controller.viewport().offset, ScreenOffset::default());
}

#[test]
fn test_focus_centers_room_in_inset_region() {
    let (mut controller, _, b) = setup();
    let top_inset = 80.0;
    let bottom_inset = 120.0;

    let transition = controller
        .focus_on_room(b, CANVAS, top_inset, bottom_inset)
        .unwrap();
    assert_eq!(transition.target, controller.viewport());
    assert!((transition.duration_secs - 0.4).abs() < 1e-9);
    assert_eq!(transition.easing, Easing::EaseOut);

    // The room center lands at the vertical center of the inset
    // region, horizontally centered on the canvas.
    let room_center_on_screen = screen_position(&controller, Point::new(22.0, 12.0));
    let available_height = CANVAS.height - top_inset - bottom_inset;
    assert!((room_center_on_screen.x - CANVAS.width * 0.5).abs() < 1e-6);
    assert!((room_center_on_screen.y - (top_inset + available_height * 0.5)).abs() < 1e-6);
}

#[test]
fn test_focus_scale_fits_room_with_padding() {
    let (mut controller, _, b) = setup();

    controller.focus_on_room(b, CANVAS, 80.0, 120.0).unwrap();

    let transform = controller.base_transform(CANVAS).unwrap();
    let room_side_px = 4.0 * transform.scale();
    let available_height = CANVAS.height - 80.0 - 120.0;
    let expected = (CANVAS.width / room_side_px).min(available_height / room_side_px) * 0.9;

    let zoom_bounds = controller.zoom_bounds(CANVAS);
    assert!(controller.viewport().scale <= zoom_bounds.max);
    assert!((controller.viewport().scale - zoom_bounds.clamp(expected)).abs() < 1e-9);
}

#[test]
fn test_focus_on_unknown_room_is_none() {
    let (mut controller, _, _) = setup();
    assert!(controller
        .focus_on_room(Uuid::new_v4(), CANVAS, 0.0, 0.0)
        .is_none());
    assert_eq!(controller.viewport(), Viewport::default());
}

#[test]
fn test_reset_restores_pre_focus_viewport() {
    let (mut controller, _, b) = setup();

    // Browse to a custom view, then focus
    controller.pan_changed(ScreenOffset::new(40.0, 10.0));
    controller.pan_ended(
        ScreenOffset::new(40.0, 10.0),
        ScreenPoint::new(0.0, 0.0),
        CANVAS,
    );
    let browsed = controller.viewport();

    controller.focus_on_room(b, CANVAS, 80.0, 120.0).unwrap();
    assert_ne!(controller.viewport(), browsed);

    let transition = controller.reset_viewport(true);
    assert_eq!(transition.target, browsed);
    assert_eq!(controller.viewport(), browsed);
}

#[test]
fn test_reset_without_saved_viewport_goes_to_identity() {
    let (mut controller, _, b) = setup();

    controller.focus_on_room(b, CANVAS, 80.0, 120.0).unwrap();
    let transition = controller.reset_viewport(false);
    assert_eq!(transition.target, Viewport::default());

    // The saved viewport is consumed; a second restore also lands on
    // the identity
    controller.focus_on_room(b, CANVAS, 80.0, 120.0).unwrap();
    controller.reset_viewport(false);
    let transition = controller.reset_viewport(true);
    assert_eq!(transition.target, Viewport::default());
}

#[test]
fn test_new_focus_overwrites_prior_target() {
    let (mut controller, a, b) = setup();

    let first = controller.focus_on_room(b, CANVAS, 80.0, 120.0).unwrap();
    let second = controller.focus_on_room(a, CANVAS, 80.0, 120.0).unwrap();

    assert_ne!(first.target, second.target);
    assert_eq!(controller.viewport(), second.target);
}
