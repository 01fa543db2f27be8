//! Gesture classification tests - threshold behavior, live updates, and
//! release semantics driven against a real board.

use crate::helpers::*;
use botboard::input::{GestureOutcome, GestureState};
use gpui::{point, px};

#[test]
fn test_diagonal_travel_uses_max_axis_metric() {
    let (mut board, id) = board_with_command_at((100.0, 100.0));
    let mut gesture = GestureState::default();

    let press = screen_over_block((100.0, 100.0), (10.0, 10.0));
    press_on_block(&mut gesture, &board, id, press);

    // (4, 4): both axes under the threshold - still a potential click
    assert!(!gesture.motion(&mut board, point(press.x + px(4.0), press.y + px(4.0))));
    assert_block_position(&board, id, (100.0, 100.0));

    // (4, 5): one axis reaches the threshold - now a drag
    assert!(gesture.motion(&mut board, point(press.x + px(4.0), press.y + px(5.0))));
    assert!(gesture.dragging_block().is_some());
}

#[test]
fn test_live_positions_are_unsnapped_until_release() {
    let (mut board, id) = board_with_command_at((100.0, 100.0));
    let mut gesture = GestureState::default();

    let press = screen_over_block((100.0, 100.0), (5.0, 5.0));
    press_on_block(&mut gesture, &board, id, press);

    gesture.motion(&mut board, point(press.x + px(13.0), press.y + px(7.0)));
    assert_block_position(&board, id, (113.0, 107.0));

    gesture.motion(&mut board, point(press.x + px(14.0), press.y + px(9.0)));
    assert_block_position(&board, id, (114.0, 109.0));
}

#[test]
fn test_last_move_wins_before_snap() {
    let (mut board, id) = board_with_command_at((0.0, 0.0));
    let mut gesture = GestureState::default();

    let press = screen_over_block((0.0, 0.0), (0.0, 0.0));
    press_on_block(&mut gesture, &board, id, press);

    gesture.motion(&mut board, point(press.x + px(200.0), press.y));
    gesture.motion(&mut board, point(press.x + px(61.0), press.y + px(22.0)));
    let outcome = gesture.release(&mut board, point(press.x + px(61.0), press.y + px(22.0)));

    assert_eq!(outcome, GestureOutcome::Dropped(id));
    assert_block_position(&board, id, (80.0, 40.0));
}

#[test]
fn test_drag_never_resolves_as_click() {
    let (mut board, id) = board_with_command_at((100.0, 100.0));
    let mut gesture = GestureState::default();

    let press = screen_over_block((100.0, 100.0), (20.0, 20.0));
    press_on_block(&mut gesture, &board, id, press);
    gesture.motion(&mut board, point(press.x + px(30.0), press.y));

    // Even releasing back at the press point: once dragging, never a click
    let outcome = gesture.release(&mut board, press);
    assert!(matches!(outcome, GestureOutcome::Dropped(_)));
}

#[test]
fn test_grab_offset_prevents_position_jump() {
    let (mut board, id) = board_with_command_at((100.0, 100.0));
    let mut gesture = GestureState::default();

    // Grab the block well inside its body
    let press = screen_over_block((100.0, 100.0), (250.0, 60.0));
    press_on_block(&mut gesture, &board, id, press);

    // Move exactly the threshold: the block's origin shifts by the same
    // delta as the pointer, not to the pointer
    gesture.motion(&mut board, point(press.x + px(6.0), press.y));
    assert_block_position(&board, id, (106.0, 100.0));
}

#[test]
fn test_release_without_gesture_is_noop() {
    let (mut board, id) = board_with_command_at((100.0, 100.0));
    let mut gesture = GestureState::default();

    let outcome = gesture.release(&mut board, pos(400.0, 300.0));
    assert_eq!(outcome, GestureOutcome::None);
    assert_block_position(&board, id, (100.0, 100.0));
}

#[test]
fn test_gesture_on_missing_block_stays_harmless() {
    // A block removed mid-gesture (e.g. via the collection shrinking)
    // leaves moves and the final snap as silent no-ops.
    let (mut board, id) = board_with_command_at((100.0, 100.0));
    let mut gesture = GestureState::default();

    let press = screen_over_block((100.0, 100.0), (10.0, 10.0));
    press_on_block(&mut gesture, &board, id, press);
    board.remove_block(id);

    gesture.motion(&mut board, point(press.x + px(50.0), press.y));
    let outcome = gesture.release(&mut board, point(press.x + px(50.0), press.y));
    assert_eq!(outcome, GestureOutcome::Dropped(id));
    assert!(board.is_empty());
}
