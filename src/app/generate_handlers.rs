//! Submission to the generation service.

use super::Botboard;
use crate::generate::{self, GenerateOutcome, GeneratePayload};
use crate::notifications::Toast;
use gpui::*;
use std::sync::mpsc::TryRecvError;

impl Botboard {
    /// Snapshot the collection and submit it on a worker thread. Only the
    /// generate control is disabled while a request is in flight; the
    /// canvas stays fully interactive.
    pub fn submit_generate(&mut self, cx: &mut Context<Self>) {
        if self.generation.submitting {
            return;
        }

        let payload = GeneratePayload::new(&self.wizard.profile, self.canvas.board.blocks());
        let rx = generate::spawn_generate(
            payload,
            self.settings.generator_url.clone(),
            self.settings.download_dir(),
        );
        self.generation.submitting = true;
        self.generation.outcome_rx = Some(rx);
        self.ui.toasts.push(Toast::info("Generating bot..."));
        cx.notify();
    }

    /// Drain the worker channel. Called at the top of render, so an
    /// outcome is reflected in the frame being painted.
    pub fn poll_generate(&mut self) {
        let Some(rx) = self.generation.outcome_rx.as_ref() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                GenerateOutcome::Failed("Bot generation failed".to_string())
            }
        };

        self.generation.submitting = false;
        self.generation.outcome_rx = None;
        match outcome {
            GenerateOutcome::Saved(path) => self
                .ui
                .toasts
                .push(Toast::success(format!("Saved {}", path.display()))),
            GenerateOutcome::Failed(message) => self.ui.toasts.push(Toast::error(message)),
        }
    }
}
