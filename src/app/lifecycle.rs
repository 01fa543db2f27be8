//! Application lifecycle - initialization.

use super::{Botboard, CanvasState, EditorState, GenerationState, UiState, WizardState, WizardStep};
use crate::board::Board;
use crate::input::GestureState;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use crate::types::BotProfile;
use gpui::*;
use gpui_component::input::InputState;

impl Botboard {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings = Settings::load();

        let name_input = cx.new(|cx| InputState::new(window, cx).placeholder("My bot"));
        let token_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("123456:ABC-DEF..."));

        let mut board = Board::new();
        board.observe(|event| tracing::trace!(?event, "block mutation"));

        Self {
            wizard: WizardState {
                step: WizardStep::default(),
                name_input,
                token_input,
                profile: BotProfile::default(),
            },
            canvas: CanvasState {
                board,
                gesture: GestureState::default(),
            },
            editor: EditorState::default(),
            generation: GenerationState::default(),
            settings,
            ui: UiState {
                toasts: ToastManager::new(),
            },
        }
    }
}
