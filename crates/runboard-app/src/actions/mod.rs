//! Action handlers: background work requested by the update function
//!
//! Each [`UpdateAction`] becomes one tokio task that reports back to the TEA
//! loop with a [`Message`]. Nothing here touches `AppState`.

mod polling;

use std::sync::Arc;

use tokio::sync::mpsc;

use runboard_client::RunService;
use runboard_core::prelude::*;
use runboard_core::RunAction;

use crate::handler::UpdateAction;
use crate::message::Message;

pub use polling::spawn_poll_timer;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: RunService + Sync + 'static,
{
    match action {
        UpdateAction::RefreshRuns { seq } => {
            tokio::spawn(async move {
                let msg = match service.list_runs().await {
                    Ok(runs) => Message::RunsRefreshed { seq, runs },
                    Err(e) => Message::RefreshFailed {
                        seq,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CancelRun { run_id } => {
            tokio::spawn(async move {
                let result = service.cancel_run(&run_id).await;
                let _ = msg_tx
                    .send(action_result(RunAction::Cancel, run_id, result))
                    .await;
            });
        }

        UpdateAction::DeleteRun { run_id } => {
            tokio::spawn(async move {
                let result = service.delete_run(&run_id).await;
                let _ = msg_tx
                    .send(action_result(RunAction::Delete, run_id, result))
                    .await;
            });
        }
    }
}

fn action_result(kind: RunAction, run_id: String, result: Result<()>) -> Message {
    match result {
        Ok(()) => Message::ActionCompleted { kind, run_id },
        Err(e) => Message::ActionFailed {
            kind,
            run_id,
            error: e.to_string(),
        },
    }
}
