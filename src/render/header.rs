//! Header bar - back navigation, bot name, and the generate control.

use crate::app::Botboard;
use crate::constants::HEADER_HEIGHT;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{h_flex, ActiveTheme as _};

pub fn render_header(app: &Botboard, cx: &mut Context<Botboard>) -> impl IntoElement {
    let submitting = app.generation.submitting;
    let bot_name = app.wizard.profile.name.clone();

    h_flex()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .px(px(12.0))
        .items_center()
        .justify_between()
        .border_b_1()
        .border_color(cx.theme().border)
        .bg(cx.theme().title_bar)
        .child(
            h_flex()
                .gap(px(10.0))
                .items_center()
                .child(
                    Button::new("back-to-settings")
                        .label("Back")
                        .ghost()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.back_to_bot_settings(cx);
                        })),
                )
                .child(
                    div()
                        .text_sm()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(cx.theme().foreground)
                        .child(bot_name),
                ),
        )
        .child(
            // submit_generate ignores clicks while a request is in flight
            Button::new("generate-bot")
                .label(if submitting {
                    "Generating..."
                } else {
                    "Generate bot"
                })
                .primary()
                .on_click(cx.listener(|this, _, _, cx| {
                    this.submit_generate(cx);
                })),
        )
}
