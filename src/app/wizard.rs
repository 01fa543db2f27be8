//! Bot settings step - the form shown before the editor.

use super::{Botboard, WizardStep};
use crate::notifications::Toast;
use crate::types::BotProfile;
use gpui::*;

impl Botboard {
    /// Read the name/token inputs and advance to the editor.
    pub fn confirm_bot_settings(&mut self, cx: &mut Context<Self>) {
        let name = self.wizard.name_input.read(cx).value().trim().to_string();
        let token = self.wizard.token_input.read(cx).value().trim().to_string();

        if name.is_empty() || token.is_empty() {
            self.ui
                .toasts
                .push(Toast::info("Enter a bot name and token to continue"));
            cx.notify();
            return;
        }

        self.wizard.profile = BotProfile { name, token };
        self.wizard.step = WizardStep::Editor;
        cx.notify();
    }

    /// Return to the settings step. Blocks are kept; only the step changes.
    pub fn back_to_bot_settings(&mut self, cx: &mut Context<Self>) {
        self.wizard.step = WizardStep::BotSettings;
        cx.notify();
    }
}
