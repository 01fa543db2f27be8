//! Application module - the main Botboard application state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Botboard struct definition and sub-structs
//! - `lifecycle` - Initialization
//! - `wizard` - Bot settings step handlers
//! - `block_management` - Block creation handlers
//! - `edit_session` - Modal edit session lifecycle
//! - `generate_handlers` - Submission to the generation service

mod state;
mod lifecycle;
mod wizard;
mod block_management;
mod edit_session;
mod generate_handlers;

pub use state::{
    BlockEditSession, Botboard, ButtonRowInputs, CanvasState, EditorState, GenerationState,
    UiState, WizardState, WizardStep,
};
