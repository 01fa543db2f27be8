//! Modal edit session lifecycle - open, mutate the draft, save or cancel.
//!
//! The session holds a private draft of the clicked block's settings; the
//! collection is only touched when the draft is committed on save. Opening
//! replaces any session already open, so at most one exists at a time.

use super::state::{BlockEditSession, Botboard, ButtonRowInputs};
use crate::types::{parse_triggers, BlockId, BlockKind, BlockSettings, ResponseButton, ResponseContent};
use gpui::*;
use gpui_component::input::InputState;

impl BlockEditSession {
    fn build(
        block_id: BlockId,
        draft: BlockSettings,
        window: &mut Window,
        cx: &mut Context<Botboard>,
    ) -> Self {
        let kind = draft.kind();
        let field_value = match &draft {
            BlockSettings::Command { command, .. } => command.clone(),
            BlockSettings::AutoReply { triggers, .. } => triggers.join(", "),
            BlockSettings::Custom { function, .. } => function.clone(),
        };
        let field_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(kind.field_placeholder())
                .default_value(field_value)
        });

        let response = draft.response().clone();
        let response_text_input =
            cx.new(|cx| InputState::new(window, cx).default_value(response.text.clone()));
        let image_url_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("https://example.com/image.png")
                .default_value(response.image_url.clone().unwrap_or_default())
        });
        let button_rows = response
            .buttons
            .iter()
            .map(|button| ButtonRowInputs {
                text: cx.new(|cx| {
                    InputState::new(window, cx)
                        .placeholder("Button text")
                        .default_value(button.text.clone())
                }),
                callback: cx.new(|cx| {
                    InputState::new(window, cx)
                        .placeholder("Callback")
                        .default_value(button.callback.clone())
                }),
            })
            .collect();

        let only_if_admin = matches!(
            &draft,
            BlockSettings::Command {
                only_if_admin: true,
                ..
            }
        );

        Self {
            block_id,
            draft,
            field_input,
            response_text_input,
            image_url_input,
            button_rows,
            only_if_admin,
            backdrop_clicked: false,
        }
    }

    /// Read the form inputs back into the draft. Trigger text is split on
    /// commas with empties dropped, so malformed input degrades to an
    /// empty list. Exhaustive over the draft's kind.
    fn sync_draft(&mut self, cx: &App) {
        let field = self.field_input.read(cx).value().to_string();
        let image_url = self.image_url_input.read(cx).value().trim().to_string();
        let response = ResponseContent {
            text: self.response_text_input.read(cx).value().to_string(),
            image_url: (!image_url.is_empty()).then_some(image_url),
            buttons: self
                .button_rows
                .iter()
                .map(|row| ResponseButton {
                    text: row.text.read(cx).value().to_string(),
                    callback: row.callback.read(cx).value().to_string(),
                })
                .collect(),
        };

        self.draft = match self.draft.kind() {
            BlockKind::Command => BlockSettings::Command {
                command: field.trim().to_string(),
                only_if_admin: self.only_if_admin,
                response,
            },
            BlockKind::AutoReply => BlockSettings::AutoReply {
                triggers: parse_triggers(&field),
                response,
            },
            BlockKind::Custom => BlockSettings::Custom {
                function: field.trim().to_string(),
                response,
            },
        };
    }
}

impl Botboard {
    /// Open the edit modal for `id`. Reached only from a gesture that
    /// resolved as a click.
    pub fn open_block_editor(&mut self, id: BlockId, window: &mut Window, cx: &mut Context<Self>) {
        let Some(block) = self.canvas.board.get_block(id) else {
            return;
        };
        let draft = block.settings.clone();
        self.editor.session = Some(BlockEditSession::build(id, draft, window, cx));
        cx.notify();
    }

    /// Switch the draft to a different kind. The shared response carries
    /// over; fields of the old kind are discarded and the new kind's
    /// fields start empty.
    pub fn set_editor_kind(&mut self, kind: BlockKind, window: &mut Window, cx: &mut Context<Self>) {
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };
        if session.kind() == kind {
            return;
        }
        session.sync_draft(cx);
        let id = session.block_id;
        let draft = session.draft.clone().retargeted(kind);
        self.editor.session = Some(BlockEditSession::build(id, draft, window, cx));
        cx.notify();
    }

    /// Append an empty button row to the draft's response.
    pub fn add_editor_button(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };
        session.button_rows.push(ButtonRowInputs {
            text: cx.new(|cx| InputState::new(window, cx).placeholder("Button text")),
            callback: cx.new(|cx| InputState::new(window, cx).placeholder("Callback")),
        });
        cx.notify();
    }

    pub fn remove_editor_button(&mut self, index: usize, cx: &mut Context<Self>) {
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };
        if index < session.button_rows.len() {
            session.button_rows.remove(index);
            cx.notify();
        }
    }

    pub fn toggle_editor_admin_only(&mut self, cx: &mut Context<Self>) {
        let Some(session) = self.editor.session.as_mut() else {
            return;
        };
        session.only_if_admin = !session.only_if_admin;
        cx.notify();
    }

    /// Commit the draft through the board and close the session.
    pub fn save_block_edits(&mut self, cx: &mut Context<Self>) {
        let Some(mut session) = self.editor.session.take() else {
            return;
        };
        session.sync_draft(cx);
        self.canvas.board.apply_settings(session.block_id, session.draft);
        cx.notify();
    }

    /// Discard the draft and close the session; the collection is
    /// untouched.
    pub fn cancel_block_edits(&mut self, cx: &mut Context<Self>) {
        self.editor.session = None;
        cx.notify();
    }
}
