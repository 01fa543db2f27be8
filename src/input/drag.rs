//! Mouse move event handling - live block repositioning.
//!
//! ## Performance Notes
//!
//! Mouse move fires very frequently during drag operations (60+ times per
//! second). The handler exits immediately when no gesture is active and
//! performs at most one board mutation per event.

use crate::app::Botboard;
use crate::profile_scope;
use gpui::*;

impl Botboard {
    /// Handle pointer movement anywhere in the window.
    ///
    /// Registered on the window-spanning root so moves keep arriving when
    /// the pointer leaves the canvas bounds mid-gesture. The gesture state
    /// machine decides whether the move classifies a drag or streams a new
    /// live position; positions are unsnapped here, last-write-wins.
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        if self.canvas.gesture.is_idle() {
            return;
        }

        let canvas = &mut self.canvas;
        if canvas.gesture.motion(&mut canvas.board, event.position) {
            cx.notify();
        }
    }
}
