//! Mouse down event handling - hit testing and gesture initiation.

use crate::app::Botboard;
use crate::board::BlockRegion;
use crate::constants::{DOCK_WIDTH, HEADER_HEIGHT};
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use gpui::*;

impl Botboard {
    /// Handle a press inside the canvas area.
    ///
    /// Presses on a block's remove control are consumed by the removal and
    /// never start a gesture; presses on a block body open a pending
    /// gesture with the grab offset captured so the block does not jump
    /// when a drag engages. While the edit modal is open the canvas is
    /// inert.
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        if self.editor.session.is_some() {
            return;
        }

        let canvas_pos = CoordinateConverter::screen_point_to_canvas(event.position);
        let Some(hit) = self.canvas.board.block_at(canvas_pos) else {
            return;
        };

        match hit.region {
            BlockRegion::RemoveButton => {
                self.canvas.board.remove_block(hit.id);
                cx.notify();
            }
            BlockRegion::Body => {
                let Some(block) = self.canvas.board.get_block(hit.id) else {
                    return;
                };
                let (bx, by) = block.position;
                let grab_offset = point(
                    event.position.x - px(bx + DOCK_WIDTH),
                    event.position.y - px(by + HEADER_HEIGHT),
                );
                self.canvas.gesture.begin(hit.id, event.position, grab_offset);
                cx.notify();
            }
        }
    }
}
