//! Main update function - handles state transitions (TEA pattern)

use chrono::Utc;

use runboard_core::prelude::*;
use runboard_core::RunAction;

use crate::message::Message;
use crate::state::AppState;

use super::keys::handle_key;
use super::{UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the event loop to execute
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // Redraw only; "last updated" is derived at render time
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Table navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.view.select_next(&state.runs);
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.view.select_previous();
            UpdateResult::none()
        }

        Message::NextPage => {
            state.view.next_page(&state.runs);
            UpdateResult::none()
        }

        Message::PreviousPage => {
            state.view.previous_page(&state.runs);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filters
        // ─────────────────────────────────────────────────────────
        Message::ToggleStatusFilter(status) => {
            state.view.toggle_status(status);
            UpdateResult::none()
        }

        Message::ClearStatusFilter => {
            state.view.clear_status_filter();
            UpdateResult::none()
        }

        Message::CycleAlgorithmFilter => {
            state.view.cycle_algorithm_filter(&state.runs);
            UpdateResult::none()
        }

        Message::CycleSort => {
            state.view.cycle_sort();
            UpdateResult::none()
        }

        Message::CycleInterval => {
            let interval = state.refresh.cycle_interval();
            info!("Auto-refresh interval set to {}", interval.label());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Refresh
        // ─────────────────────────────────────────────────────────
        Message::RequestRefresh => match state.refresh.try_begin_manual() {
            Some(seq) => UpdateResult::action(UpdateAction::RefreshRuns { seq }),
            None => {
                debug!("Refresh already in progress, ignoring manual refresh");
                UpdateResult::none()
            }
        },

        Message::PollTick => {
            let seq = state.refresh.begin();
            debug!("Poll timer fired, refresh #{}", seq);
            UpdateResult::action(UpdateAction::RefreshRuns { seq })
        }

        Message::RunsRefreshed { seq, runs } => {
            if state.refresh.complete_success(seq, Utc::now()) {
                debug!("Applied refresh #{} ({} runs)", seq, runs.len());
                state.apply_runs(runs);
            } else {
                debug!("Discarded stale refresh #{}", seq);
            }
            UpdateResult::none()
        }

        Message::RefreshFailed { seq, error } => {
            if state.refresh.complete_failure(seq, error.clone()) {
                warn!("Refresh #{} failed: {}", seq, error);
            } else {
                debug!("Discarded stale refresh failure #{}: {}", seq, error);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Cancel / delete
        // ─────────────────────────────────────────────────────────
        Message::RequestAction(kind) => {
            if let Some(run) = state.selected_run().cloned() {
                if !state.flow_mut(kind).request(&run) {
                    debug!("{} not available for run {}", kind.label(), run.id);
                }
            }
            UpdateResult::none()
        }

        Message::ConfirmAction(kind) => match state.flow_mut(kind).confirm() {
            Some(run_id) => {
                info!("{} requested for run {}", kind.label(), run_id);
                UpdateResult::action(match kind {
                    RunAction::Cancel => UpdateAction::CancelRun { run_id },
                    RunAction::Delete => UpdateAction::DeleteRun { run_id },
                })
            }
            None => UpdateResult::none(),
        },

        Message::DismissAction(kind) => {
            state.flow_mut(kind).dismiss_confirm();
            UpdateResult::none()
        }

        Message::ActionCompleted { kind, run_id } => {
            if state.flow_mut(kind).complete(&run_id, Ok(())) {
                info!("{} succeeded for run {}", kind.label(), run_id);
            }
            UpdateResult::none()
        }

        Message::ActionFailed {
            kind,
            run_id,
            error,
        } => {
            error!("{} failed for run {}: {}", kind.label(), run_id, error);
            state.flow_mut(kind).complete(&run_id, Err(error));
            UpdateResult::none()
        }

        Message::DismissActionResult(kind) => {
            if state.flow_mut(kind).dismiss_result() {
                // Always refetch after a successful action, even mid-refresh
                let seq = state.refresh.begin();
                UpdateResult::action(UpdateAction::RefreshRuns { seq })
            } else {
                UpdateResult::none()
            }
        }
    }
}
