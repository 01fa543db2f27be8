//! Coordinate conversion and grid snapping tests.

use crate::helpers::pos;
use botboard::constants::{DOCK_WIDTH, GRID_SIZE, HEADER_HEIGHT};
use botboard::input::coords::CoordinateConverter;
use gpui::{point, px};

#[test]
fn test_screen_to_canvas_subtracts_origin_and_grab() {
    let screen = pos(DOCK_WIDTH + 150.0, HEADER_HEIGHT + 90.0);
    let grab = point(px(30.0), px(10.0));
    assert_eq!(
        CoordinateConverter::screen_to_canvas(screen, grab),
        (120.0, 80.0)
    );
}

#[test]
fn test_screen_to_canvas_does_not_round() {
    let screen = pos(DOCK_WIDTH + 103.7, HEADER_HEIGHT + 42.2);
    let grab = point(px(0.5), px(0.25));
    let (x, y) = CoordinateConverter::screen_to_canvas(screen, grab);
    assert!((x - 103.2).abs() < 1e-4);
    assert!((y - 41.95).abs() < 1e-4);
}

#[test]
fn test_screen_point_to_canvas() {
    let screen = pos(DOCK_WIDTH + 10.0, HEADER_HEIGHT + 20.0);
    assert_eq!(
        CoordinateConverter::screen_point_to_canvas(screen),
        (10.0, 20.0)
    );
}

#[test]
fn test_snap_rounds_each_axis_independently() {
    assert_eq!(
        CoordinateConverter::snap_to_grid((123.0, 95.0), GRID_SIZE),
        (120.0, 80.0)
    );
    assert_eq!(
        CoordinateConverter::snap_to_grid((139.0, 141.0), GRID_SIZE),
        (120.0, 160.0)
    );
}

#[test]
fn test_snap_is_identity_on_grid_multiples() {
    assert_eq!(
        CoordinateConverter::snap_to_grid((80.0, -120.0), GRID_SIZE),
        (80.0, -120.0)
    );
    assert_eq!(CoordinateConverter::snap_to_grid((0.0, 0.0), GRID_SIZE), (0.0, 0.0));
}

#[test]
fn test_snap_rounds_half_away_from_zero() {
    assert_eq!(
        CoordinateConverter::snap_to_grid((20.0, -20.0), GRID_SIZE),
        (40.0, -40.0)
    );
}

#[test]
fn test_snap_handles_negative_positions() {
    assert_eq!(
        CoordinateConverter::snap_to_grid((-23.0, -57.0), GRID_SIZE),
        (-40.0, -40.0)
    );
}
