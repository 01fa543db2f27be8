//! Mouse up event handling - gesture resolution.

use crate::app::Botboard;
use crate::input::GestureOutcome;
use gpui::*;

impl Botboard {
    /// Resolve the active gesture, if any.
    ///
    /// Registered on the window-spanning root so the release is delivered
    /// no matter where the pointer ended up. A click opens the edit modal
    /// for the pressed block - the only path that opens it. A drag commits
    /// the snapped position (the state machine has already written it).
    /// Either way the gesture session is gone when this returns; a release
    /// with no active gesture is a no-op.
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let canvas = &mut self.canvas;
        match canvas.gesture.release(&mut canvas.board, event.position) {
            GestureOutcome::None => {}
            GestureOutcome::Clicked(id) => {
                self.open_block_editor(id, window, cx);
                cx.notify();
            }
            GestureOutcome::Dropped(_) => {
                cx.notify();
            }
        }
    }
}
