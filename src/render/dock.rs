//! Block dock rendering - left-side column with one add-button per kind.

use crate::app::Botboard;
use crate::constants::DOCK_WIDTH;
use crate::types::BlockKind;
use gpui::*;
use gpui_component::ActiveTheme as _;

fn dock_glyph(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Command => "/",
        BlockKind::AutoReply => "↩",
        BlockKind::Custom => "ƒ",
    }
}

fn render_dock_button(kind: BlockKind, cx: &mut Context<Botboard>) -> Stateful<Div> {
    let fg = cx.theme().muted_foreground;
    let hover_bg = cx.theme().muted;

    div()
        .id(ElementId::Name(format!("add-{:?}", kind).into()))
        .w(px(40.0))
        .h(px(40.0))
        .rounded(px(8.0))
        .hover(move |s| s.bg(hover_bg))
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(fg)
                .child(dock_glyph(kind)),
        )
        .on_click(cx.listener(move |this, _, _, cx| {
            this.add_block(kind, cx);
        }))
}

/// Render the block dock.
pub fn render_dock(cx: &mut Context<Botboard>) -> Stateful<Div> {
    let border_color = cx.theme().border;

    let mut dock = div()
        .id("block-dock")
        .w(px(DOCK_WIDTH))
        .h_full()
        .flex()
        .flex_col()
        .items_center()
        .py(px(16.0))
        .gap(px(6.0))
        .border_r_1()
        .border_color(border_color);

    for &kind in BlockKind::all() {
        dock = dock.child(render_dock_button(kind, cx));
    }

    dock
}
