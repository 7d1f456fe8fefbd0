//! Key event handlers for the run table and modal dialogs

use runboard_core::{DisplayStatus, RunAction};

use crate::confirm_dialog::ConfirmDialogState;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages. An open dialog captures all input.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.active_dialog() {
        Some(dialog) => handle_key_dialog(&dialog, key),
        None => handle_key_normal(key),
    }
}

fn handle_key_dialog(dialog: &ConfirmDialogState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => dialog.primary().cloned(),
        InputKey::Char('n' | 'N') | InputKey::Esc => dialog.secondary().cloned(),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextPage),
        InputKey::Left | InputKey::Char('h') => Some(Message::PreviousPage),

        InputKey::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            DisplayStatus::ALL
                .get(index)
                .map(|status| Message::ToggleStatusFilter(*status))
        }
        InputKey::Char('0') => Some(Message::ClearStatusFilter),
        InputKey::Char('a') => Some(Message::CycleAlgorithmFilter),
        InputKey::Char('s') => Some(Message::CycleSort),
        InputKey::Char('i') => Some(Message::CycleInterval),

        InputKey::Char('r') => Some(Message::RequestRefresh),
        InputKey::Char('c') => Some(Message::RequestAction(RunAction::Cancel)),
        InputKey::Char('d') => Some(Message::RequestAction(RunAction::Delete)),

        _ => None,
    }
}
