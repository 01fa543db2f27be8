//! Shared modal utilities - backdrop helpers, section headers, setting rows.

use crate::app::Botboard;
use crate::constants::MODAL_BACKDROP_OPACITY;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

// ============================================================================
// Backdrop Click-to-Close Pattern
// ============================================================================

/// Renders a modal backdrop with click-to-close behavior using state-tracking.
///
/// This pattern uses a boolean flag to distinguish between clicks on the
/// backdrop versus clicks on the modal content. The flag is set on mouse down
/// and checked on mouse up - only if the mouse went down on the backdrop (not
/// the modal) does the close action trigger.
pub fn render_modal_backdrop(
    id: impl Into<ElementId>,
    cx: &mut Context<Botboard>,
    on_backdrop_mouse_down: impl Fn(&mut Botboard, &MouseDownEvent, &mut Window, &mut Context<Botboard>)
    + 'static,
    on_backdrop_mouse_up: impl Fn(&mut Botboard, &MouseUpEvent, &mut Window, &mut Context<Botboard>)
    + 'static,
    child: impl IntoElement,
) -> impl IntoElement {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(MouseButton::Left, cx.listener(on_backdrop_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(on_backdrop_mouse_up))
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(child),
    )
    .with_priority(1500)
}

/// Adds mouse event handlers to prevent backdrop close when clicking on
/// modal content.
pub fn modal_intercept_backdrop_clicks_stateful(
    div: Stateful<Div>,
    cx: &mut Context<Botboard>,
    on_mouse_down: impl Fn(&mut Botboard, &MouseDownEvent, &mut Window, &mut Context<Botboard>)
    + 'static,
    on_mouse_up: impl Fn(&mut Botboard, &MouseUpEvent, &mut Window, &mut Context<Botboard>) + 'static,
) -> Stateful<Div> {
    div.on_mouse_down(MouseButton::Left, cx.listener(on_mouse_down))
        .on_mouse_up(MouseButton::Left, cx.listener(on_mouse_up))
}

// ============================================================================
// Form Helpers
// ============================================================================

/// Render a section header
pub fn render_section_header(title: &str, cx: &Context<Botboard>) -> Div {
    let muted_fg = cx.theme().muted_foreground;
    let border = cx.theme().border;

    div()
        .w_full()
        .pb_2()
        .mb_2()
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_xs()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(muted_fg)
                .child(title.to_string().to_uppercase()),
        )
}

/// Render a setting row with title, description, and control on the right
pub fn render_setting_row(
    title: &str,
    description: &str,
    control: impl IntoElement,
    cx: &Context<Botboard>,
) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    h_flex()
        .w_full()
        .py_3()
        .items_center()
        .justify_between()
        .gap_4()
        .child(
            v_flex()
                .flex_1()
                .min_w_0()
                .gap(px(2.0))
                .child(div().text_sm().text_color(fg).child(title.to_string()))
                .child(
                    div()
                        .text_xs()
                        .text_color(muted_fg)
                        .child(description.to_string()),
                ),
        )
        .child(div().flex_shrink_0().child(control))
}
