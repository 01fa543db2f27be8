//! Block creation handlers.

use super::Botboard;
use crate::types::BlockKind;
use gpui::*;

impl Botboard {
    /// Add a block of `kind` at the default spawn position.
    pub fn add_block(&mut self, kind: BlockKind, cx: &mut Context<Self>) {
        self.canvas.board.add_block(kind);
        cx.notify();
    }
}
