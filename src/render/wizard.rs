//! Bot settings step - the form shown before the editor opens.

use crate::app::Botboard;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};
use gpui_component::{v_flex, ActiveTheme as _};

fn render_field(
    label: &'static str,
    input: &Entity<InputState>,
    muted_fg: Hsla,
) -> impl IntoElement {
    v_flex()
        .gap(px(6.0))
        .child(div().text_xs().text_color(muted_fg).child(label))
        .child(Input::new(input).w_full())
}

pub fn render_bot_settings(app: &Botboard, cx: &mut Context<Botboard>) -> impl IntoElement {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(
            v_flex()
                .w(px(420.0))
                .gap(px(16.0))
                .child(
                    div()
                        .text_size(px(20.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(fg)
                        .child("Set up your bot"),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(muted_fg)
                        .child("Name and token first - then compose its behavior from blocks."),
                )
                .child(render_field("Bot name", &app.wizard.name_input, muted_fg))
                .child(render_field("Token", &app.wizard.token_input, muted_fg))
                .child(
                    Button::new("continue-to-editor")
                        .label("Continue")
                        .primary()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.confirm_bot_settings(cx);
                        })),
                ),
        )
}
