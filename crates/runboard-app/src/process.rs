//! Message processing
//!
//! Runs a message through the TEA update loop, dispatches the resulting
//! actions, and keeps the poll timer in line with the state.

use std::sync::Arc;

use tokio::sync::mpsc;

use runboard_client::RunService;

use crate::actions::{handle_action, spawn_poll_timer};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) where
    S: RunService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone());
        }

        msg = result.message;
    }

    reconcile_poll_timer(state, msg_tx);
}

/// Start, restart or stop the poll timer to match the interval and run count.
///
/// Stops the timer once the app is quitting.
pub fn reconcile_poll_timer(state: &mut AppState, msg_tx: &mpsc::Sender<Message>) {
    let desired = if state.should_quit() {
        None
    } else {
        state.refresh.desired_timer(state.runs.len())
    };

    if desired == state.refresh.timer_key() {
        return;
    }

    let timer = desired.map(|key| spawn_poll_timer(key, msg_tx.clone()));
    state.refresh.replace_timer(timer);
}
