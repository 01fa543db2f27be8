//! Block edit modal - kind selection and settings form for one block.
//!
//! The form edits a private draft held by the session; the collection is
//! only touched when Save commits it. Switching the kind re-shapes the
//! draft, so the form always matches the settings shape exactly.

use crate::app::{BlockEditSession, Botboard};
use crate::constants::{MODAL_HEIGHT_MD, MODAL_WIDTH_MD};
use crate::types::BlockKind;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::Input;
use gpui_component::{h_flex, v_flex, ActiveTheme as _, Icon, IconName};

use super::modal_base::{
    modal_intercept_backdrop_clicks_stateful, render_modal_backdrop, render_section_header,
    render_setting_row,
};

fn render_kind_pill(
    kind: BlockKind,
    selected: BlockKind,
    cx: &mut Context<Botboard>,
) -> Stateful<Div> {
    let is_selected = kind == selected;
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let fg = cx.theme().foreground;
    let list_hover = cx.theme().list_hover;
    let list_active = cx.theme().list_active;

    div()
        .id(ElementId::Name(format!("block-kind-{:?}", kind).into()))
        .px(px(12.0))
        .py(px(8.0))
        .rounded(px(6.0))
        .bg(if is_selected { primary } else { list_hover })
        .text_color(if is_selected { primary_fg } else { fg })
        .text_size(px(12.0))
        .font_weight(if is_selected {
            FontWeight::MEDIUM
        } else {
            FontWeight::NORMAL
        })
        .cursor_pointer()
        .hover(move |s| if is_selected { s } else { s.bg(list_active) })
        .on_click(cx.listener(move |this, _, window, cx| {
            this.set_editor_kind(kind, window, cx);
        }))
        .child(kind.label())
}

fn render_admin_checkbox(checked: bool, cx: &mut Context<Botboard>) -> Stateful<Div> {
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let border = cx.theme().border;

    div()
        .id("admin-only-toggle")
        .w(px(18.0))
        .h(px(18.0))
        .rounded(px(4.0))
        .border_1()
        .border_color(if checked { primary } else { border })
        .bg(if checked {
            primary
        } else {
            gpui::transparent_black()
        })
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .when(checked, |d| {
            d.child(
                Icon::new(IconName::Check)
                    .size(px(12.0))
                    .text_color(primary_fg),
            )
        })
        .on_click(cx.listener(|this, _, _, cx| {
            this.toggle_editor_admin_only(cx);
        }))
}

fn field_label(text: &'static str, fg: Hsla) -> Div {
    div()
        .text_size(px(13.0))
        .font_weight(FontWeight::MEDIUM)
        .text_color(fg)
        .child(text)
}

/// Render the block edit modal
pub fn render_block_edit_modal(
    session: &BlockEditSession,
    cx: &mut Context<Botboard>,
) -> impl IntoElement {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let list_hover = cx.theme().list_hover;

    let kind = session.kind();

    // Header
    let header = h_flex()
        .w_full()
        .px(px(20.0))
        .py(px(16.0))
        .border_b_1()
        .border_color(border)
        .justify_between()
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child("Edit block"),
        )
        .child(
            div()
                .id("close-block-edit")
                .cursor_pointer()
                .p(px(4.0))
                .rounded(px(4.0))
                .hover(move |s| s.bg(list_hover))
                .on_click(cx.listener(|this, _, _, cx| {
                    this.cancel_block_edits(cx);
                }))
                .child(
                    Icon::new(IconName::Close)
                        .size(px(16.0))
                        .text_color(muted_fg),
                ),
        );

    // Kind selector
    let mut kind_pills = h_flex().gap(px(8.0));
    for &k in BlockKind::all() {
        kind_pills = kind_pills.child(render_kind_pill(k, kind, cx));
    }
    let kind_selector = v_flex()
        .gap(px(8.0))
        .child(field_label("Block type", fg))
        .child(kind_pills);

    // Kind-specific field
    let kind_field = v_flex()
        .gap(px(8.0))
        .child(field_label(kind.field_label(), fg))
        .child(Input::new(&session.field_input).w_full());

    // Response section
    let response_section = v_flex()
        .gap(px(8.0))
        .child(render_section_header("Response", cx))
        .child(field_label("Text", fg))
        .child(Input::new(&session.response_text_input).w_full())
        .child(field_label("Image URL (optional)", fg))
        .child(Input::new(&session.image_url_input).w_full());

    // Button rows
    let mut buttons_section = v_flex()
        .gap(px(8.0))
        .child(render_section_header("Buttons", cx));
    for (ix, row) in session.button_rows.iter().enumerate() {
        buttons_section = buttons_section.child(
            h_flex()
                .gap(px(8.0))
                .items_center()
                .child(div().flex_1().child(Input::new(&row.text)))
                .child(div().flex_1().child(Input::new(&row.callback)))
                .child(
                    Button::new(("remove-button-row", ix))
                        .label("Remove")
                        .ghost()
                        .on_click(cx.listener(move |this, _, _, cx| {
                            this.remove_editor_button(ix, cx);
                        })),
                ),
        );
    }
    buttons_section = buttons_section.child(
        Button::new("add-button-row")
            .label("Add button")
            .ghost()
            .on_click(cx.listener(|this, _, window, cx| {
                this.add_editor_button(window, cx);
            })),
    );

    // Content
    let mut content = v_flex()
        .id("block-edit-fields")
        .flex_1()
        .w_full()
        .p(px(20.0))
        .gap(px(16.0))
        .overflow_y_scroll()
        .child(kind_selector)
        .child(kind_field)
        .child(response_section)
        .child(buttons_section);

    if kind == BlockKind::Command {
        content = content.child(render_setting_row(
            "Only for administrators",
            "Respond to this command only when the sender is a chat admin",
            render_admin_checkbox(session.only_if_admin, cx),
            cx,
        ));
    }

    // Footer
    let footer = h_flex()
        .w_full()
        .px(px(20.0))
        .py(px(16.0))
        .border_t_1()
        .border_color(border)
        .justify_end()
        .gap(px(12.0))
        .child(
            Button::new("cancel-block-edit")
                .label("Cancel")
                .ghost()
                .on_click(cx.listener(|this, _, _, cx| {
                    this.cancel_block_edits(cx);
                })),
        )
        .child(
            Button::new("save-block-edit")
                .label("Save")
                .primary()
                .on_click(cx.listener(|this, _, _, cx| {
                    this.save_block_edits(cx);
                })),
        );

    let modal = modal_intercept_backdrop_clicks_stateful(
        v_flex()
            .id("block-edit-modal")
            .w(px(MODAL_WIDTH_MD))
            .h(px(MODAL_HEIGHT_MD))
            .bg(bg)
            .border_1()
            .border_color(border)
            .rounded(px(12.0))
            .overflow_hidden()
            .shadow_lg()
            .child(header)
            .child(content)
            .child(footer),
        cx,
        // Modal mouse down: reset flag
        |this, _, _, _| {
            if let Some(session) = this.editor.session.as_mut() {
                session.backdrop_clicked = false;
            }
        },
        // Modal mouse up: reset flag
        |this, _, _, _| {
            if let Some(session) = this.editor.session.as_mut() {
                session.backdrop_clicked = false;
            }
        },
    );

    render_modal_backdrop(
        "block-edit-backdrop",
        cx,
        // Backdrop mouse down: set flag
        |this, _, _, cx| {
            if let Some(session) = this.editor.session.as_mut() {
                session.backdrop_clicked = true;
            }
            cx.notify();
        },
        // Backdrop mouse up: cancel if flag is set
        |this, _, _, cx| {
            let clicked = this
                .editor
                .session
                .as_ref()
                .is_some_and(|s| s.backdrop_clicked);
            if clicked {
                this.cancel_block_edits(cx);
            }
        },
        modal,
    )
}
