//! Confirm dialog state.
//!
//! Data model for modal dialogs. The rendering widget lives in
//! runboard-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Buttons in display order; the first is the primary one
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Quit confirmation shown while backend actions are outstanding
    pub fn quit_confirmation(pending_actions: usize) -> Self {
        Self::new(
            "Quit runboard?",
            if pending_actions == 1 {
                "1 request is still in progress.".to_string()
            } else {
                format!("{} requests are still in progress.", pending_actions)
            },
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        )
    }

    /// Message sent by the primary button
    pub fn primary(&self) -> Option<&Message> {
        self.options.first().map(|(_, msg)| msg)
    }

    /// Message sent by the secondary button (falls back to the primary one)
    pub fn secondary(&self) -> Option<&Message> {
        self.options.get(1).or(self.options.first()).map(|(_, msg)| msg)
    }
}
