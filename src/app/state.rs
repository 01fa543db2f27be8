//! Application state - the Botboard struct definition and sub-structs.

use crate::board::Board;
use crate::generate::GenerateOutcome;
use crate::input::GestureState;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use crate::types::{BlockId, BlockKind, BlockSettings, BotProfile};
use gpui::Entity;
use gpui_component::input::InputState;
use std::sync::mpsc::Receiver;

/// Which step of the setup flow is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    /// Bot name + token form
    #[default]
    BotSettings,
    /// The block canvas
    Editor,
}

/// Setup wizard state - step and bot identity inputs.
pub struct WizardState {
    pub step: WizardStep,
    pub name_input: Entity<InputState>,
    pub token_input: Entity<InputState>,
    /// Confirmed identity; consumed only by the generation client
    pub profile: BotProfile,
}

/// Canvas interaction state - the block collection and the active gesture.
pub struct CanvasState {
    pub board: Board,
    /// Gesture state machine; owns all per-gesture session data
    pub gesture: GestureState,
}

/// One inline-keyboard button row in the edit form.
pub struct ButtonRowInputs {
    pub text: Entity<InputState>,
    pub callback: Entity<InputState>,
}

/// Modal editing session for one block: a draft of its settings plus the
/// input entities backing the form. Exists only while the modal is open;
/// committed on save, dropped untouched on cancel.
pub struct BlockEditSession {
    pub block_id: BlockId,
    /// Working copy of the block's settings; the collection is only
    /// touched when this is committed
    pub draft: BlockSettings,
    /// Kind-specific field (command / trigger list / function name)
    pub field_input: Entity<InputState>,
    pub response_text_input: Entity<InputState>,
    pub image_url_input: Entity<InputState>,
    pub button_rows: Vec<ButtonRowInputs>,
    pub only_if_admin: bool,
    /// Backdrop click-to-cancel flag (set on mouse down, checked on up)
    pub backdrop_clicked: bool,
}

impl BlockEditSession {
    pub fn kind(&self) -> BlockKind {
        self.draft.kind()
    }
}

/// Modal editing overlay state. At most one session is open at a time by
/// construction.
#[derive(Default)]
pub struct EditorState {
    pub session: Option<BlockEditSession>,
}

/// Submission state. `submitting` disables only the generate control;
/// canvas interaction continues while a request is in flight.
#[derive(Default)]
pub struct GenerationState {
    pub submitting: bool,
    /// Channel from the worker thread; polled each frame
    pub outcome_rx: Option<Receiver<GenerateOutcome>>,
}

/// Miscellaneous UI state.
pub struct UiState {
    pub toasts: ToastManager,
}

/// The application root entity.
pub struct Botboard {
    pub wizard: WizardState,
    pub canvas: CanvasState,
    pub editor: EditorState,
    pub generation: GenerationState,
    pub settings: Settings,
    pub ui: UiState,
}
