//! Canvas rendering - the grid background and block cards.
//!
//! Block cards are plain positioned elements; all pointer logic goes
//! through the canvas-level handlers and the board's hit testing, so the
//! cards themselves carry no listeners.

use crate::app::Botboard;
use crate::constants::{
    BLOCK_HEIGHT, BLOCK_WIDTH, GRID_SIZE, REMOVE_BUTTON_INSET, REMOVE_BUTTON_SIZE,
};
use crate::profile_scope;
use crate::types::Block;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

pub fn render_canvas_area(app: &Botboard, cx: &mut Context<Botboard>) -> impl IntoElement {
    let dragging = app.canvas.gesture.dragging_block();
    let blocks: Vec<Block> = app.canvas.board.blocks().to_vec();
    let empty = blocks.is_empty();

    let card_bg = cx.theme().secondary;
    let border = cx.theme().border;
    let drag_border = cx.theme().primary;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    div()
        .id("canvas-area")
        .relative()
        .flex_1()
        .h_full()
        .overflow_hidden()
        .on_mouse_down(MouseButton::Left, cx.listener(Botboard::handle_mouse_down))
        .child(render_grid(border.opacity(0.3)))
        .children(blocks.iter().map(|block| {
            render_block_card(
                block,
                dragging == Some(block.id),
                card_bg,
                border,
                drag_border,
                fg,
                muted_fg,
            )
        }))
        .when(empty, |d| d.child(render_empty_hint(muted_fg)))
}

/// Paint the background grid at `GRID_SIZE` intervals.
fn render_grid(line_color: Hsla) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            profile_scope!("render_grid");

            let left = f32::from(bounds.origin.x);
            let top = f32::from(bounds.origin.y);
            let right = left + f32::from(bounds.size.width);
            let bottom = top + f32::from(bounds.size.height);

            let mut x = left;
            while x <= right {
                let mut path = PathBuilder::stroke(px(1.0));
                path.move_to(point(px(x), px(top)));
                path.line_to(point(px(x), px(bottom)));
                if let Ok(line) = path.build() {
                    window.paint_path(line, line_color);
                }
                x += GRID_SIZE;
            }

            let mut y = top;
            while y <= bottom {
                let mut path = PathBuilder::stroke(px(1.0));
                path.move_to(point(px(left), px(y)));
                path.line_to(point(px(right), px(y)));
                if let Ok(line) = path.build() {
                    window.paint_path(line, line_color);
                }
                y += GRID_SIZE;
            }
        },
    )
    .absolute()
    .size_full()
}

fn render_block_card(
    block: &Block,
    dragging: bool,
    card_bg: Hsla,
    border: Hsla,
    drag_border: Hsla,
    fg: Hsla,
    muted_fg: Hsla,
) -> Div {
    let (x, y) = block.position;

    div()
        .absolute()
        .left(px(x))
        .top(px(y))
        .w(px(BLOCK_WIDTH))
        .h(px(BLOCK_HEIGHT))
        .bg(card_bg)
        .border_1()
        .border_color(if dragging { drag_border } else { border })
        .rounded(px(8.0))
        .shadow_sm()
        .p(px(12.0))
        .child(
            v_flex()
                .gap(px(6.0))
                .child(
                    h_flex().gap(px(8.0)).items_center().child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(fg)
                            .child(block.kind().label()),
                    ),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(muted_fg)
                        .child(block.settings.summary()),
                ),
        )
        // Remove control; presses here are resolved by hit testing in
        // handle_mouse_down, so the element itself carries no listener.
        .child(
            div()
                .absolute()
                .top(px(REMOVE_BUTTON_INSET))
                .right(px(REMOVE_BUTTON_INSET))
                .w(px(REMOVE_BUTTON_SIZE))
                .h(px(REMOVE_BUTTON_SIZE))
                .rounded(px(4.0))
                .flex()
                .items_center()
                .justify_center()
                .text_xs()
                .text_color(muted_fg)
                .child("✕"),
        )
}

fn render_empty_hint(muted_fg: Hsla) -> Div {
    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(
            v_flex()
                .items_center()
                .gap(px(6.0))
                .child(
                    div()
                        .text_size(px(16.0))
                        .text_color(muted_fg)
                        .child("No blocks yet"),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(muted_fg.opacity(0.8))
                        .child("Add a block from the dock on the left"),
                ),
        )
}
