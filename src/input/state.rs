//! Gesture state machine - click/drag disambiguation for block cards.
//!
//! A gesture is one continuous press-to-release pointer interaction. The
//! machine owns all per-gesture data (pressed block, start position, grab
//! offset) so its lifetime is controller-defined: created on press,
//! destroyed on release, on every branch.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Pending     (press on a block body)
//! Pending  -> Pending     (move within the drag threshold - no mutation)
//! Pending  -> Dragging    (first move at or beyond the threshold)
//! Dragging -> Dragging    (moves keep streaming the live position)
//! Pending  -> Idle        (release - a click; the edit modal opens)
//! Dragging -> Idle        (release - a drag; position snaps to the grid)
//! ```

use crate::board::Board;
use crate::constants::{DRAG_THRESHOLD, GRID_SIZE};
use crate::input::coords::CoordinateConverter;
use crate::types::BlockId;
use gpui::{Pixels, Point};

/// Current pointer gesture, including all per-gesture session data.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,

    /// Pressed on a block, not yet classified as click or drag
    Pending {
        /// Block under the pointer at press time
        block: BlockId,
        /// Screen position of the press, for threshold measurement
        start: Point<Pixels>,
        /// Press point relative to the block's top-left corner
        grab_offset: Point<Pixels>,
    },

    /// Threshold exceeded; the block follows the pointer
    Dragging {
        block: BlockId,
        grab_offset: Point<Pixels>,
    },
}

/// How a gesture resolved at release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture was active (listeners already quiesced)
    None,
    /// Press and release without crossing the threshold - open the editor
    Clicked(BlockId),
    /// Drag finished - the snapped position has been committed
    Dropped(BlockId),
}

impl GestureState {
    /// Start a gesture for a press landing on a block's body.
    pub fn begin(&mut self, block: BlockId, press: Point<Pixels>, grab_offset: Point<Pixels>) {
        *self = GestureState::Pending {
            block,
            start: press,
            grab_offset,
        };
    }

    /// Feed a pointer move. Returns true if the board or state changed.
    ///
    /// While pending, moves under the threshold do nothing. The first move
    /// at or beyond it switches to dragging, and from then on every move
    /// streams the unsnapped canvas-local position into the board
    /// (last-write-wins).
    pub fn motion(&mut self, board: &mut Board, pos: Point<Pixels>) -> bool {
        match *self {
            GestureState::Idle => false,
            GestureState::Pending {
                block,
                start,
                grab_offset,
            } => {
                let dx = (f32::from(pos.x) - f32::from(start.x)).abs();
                let dy = (f32::from(pos.y) - f32::from(start.y)).abs();
                if dx.max(dy) < DRAG_THRESHOLD {
                    return false;
                }
                *self = GestureState::Dragging { block, grab_offset };
                board.move_block(block, CoordinateConverter::screen_to_canvas(pos, grab_offset));
                true
            }
            GestureState::Dragging { block, grab_offset } => {
                board.move_block(block, CoordinateConverter::screen_to_canvas(pos, grab_offset));
                true
            }
        }
    }

    /// Resolve the gesture at pointer release.
    ///
    /// The state is reset to `Idle` on every branch - including the no-op
    /// one - so a session can never outlive its gesture.
    pub fn release(&mut self, board: &mut Board, pos: Point<Pixels>) -> GestureOutcome {
        match std::mem::take(self) {
            GestureState::Idle => GestureOutcome::None,
            GestureState::Pending { block, .. } => GestureOutcome::Clicked(block),
            GestureState::Dragging { block, grab_offset } => {
                let live = CoordinateConverter::screen_to_canvas(pos, grab_offset);
                board.move_block(block, CoordinateConverter::snap_to_grid(live, GRID_SIZE));
                GestureOutcome::Dropped(block)
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Get the block being dragged, if any
    pub fn dragging_block(&self) -> Option<BlockId> {
        match self {
            GestureState::Dragging { block, .. } => Some(*block),
            _ => None,
        }
    }
}
