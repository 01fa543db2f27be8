//! Rendering - root layout, event wiring, and toasts.

mod canvas;
mod dock;
mod header;
mod wizard;
mod overlays;

use crate::app::{Botboard, WizardStep};
use crate::notifications::{Toast, ToastKind};
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

impl Render for Botboard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.poll_generate();
        self.ui.toasts.prune_expired();

        // Move/up listeners live on the window-spanning root so they keep
        // firing when the pointer leaves the canvas mid-gesture.
        let mut root = div()
            .id("botboard-root")
            .relative()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up));

        root = match self.wizard.step {
            WizardStep::BotSettings => root.child(wizard::render_bot_settings(self, cx)),
            WizardStep::Editor => root.child(
                v_flex()
                    .size_full()
                    .child(header::render_header(self, cx))
                    .child(
                        h_flex()
                            .flex_1()
                            .w_full()
                            .child(dock::render_dock(cx))
                            .child(canvas::render_canvas_area(self, cx)),
                    ),
            ),
        };

        if let Some(session) = self.editor.session.as_ref() {
            root = root.child(overlays::block_edit::render_block_edit_modal(session, cx));
        }

        if !self.ui.toasts.is_empty() {
            root = root.child(render_toasts(self.ui.toasts.toasts()));
        }

        root
    }
}

fn render_toasts(toasts: &[Toast]) -> impl IntoElement {
    deferred(
        div()
            .absolute()
            .bottom(px(16.0))
            .right(px(16.0))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .children(toasts.iter().map(|toast| {
                let bg = match toast.kind {
                    ToastKind::Success => hsla(145.0 / 360.0, 0.5, 0.3, 0.95),
                    ToastKind::Error => hsla(0.0, 0.6, 0.35, 0.95),
                    ToastKind::Info => hsla(220.0 / 360.0, 0.2, 0.25, 0.95),
                };
                div()
                    .px(px(14.0))
                    .py(px(10.0))
                    .rounded(px(8.0))
                    .bg(bg)
                    .shadow_lg()
                    .text_sm()
                    .text_color(hsla(0.0, 0.0, 1.0, 1.0))
                    .child(toast.message.clone())
            })),
    )
    .with_priority(2000)
}
