//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use runboard_client::test_utils::test_run;
use runboard_core::{DisplayStatus, RunAction, RunRecord, RunStatus};

fn state_with(runs: Vec<RunRecord>) -> AppState {
    let mut state = AppState::new();
    state.apply_runs(runs);
    state
}

/// Run `msg` and any follow-up messages, collecting the actions
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::RequestQuit)
    ));
}

#[test]
fn test_ctrl_c_quits_from_dialog() {
    let mut state = state_with(vec![test_run("a", RunStatus::Success, 100)]);
    press(&mut state, InputKey::Char('d'));
    assert!(state.has_dialog());
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_number_keys_toggle_statuses() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('2')),
        Some(Message::ToggleStatusFilter(DisplayStatus::Running))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('5')),
        Some(Message::ToggleStatusFilter(DisplayStatus::Cancelled))
    ));
    assert!(handle_key(&state, InputKey::Char('6')).is_none());
}

#[test]
fn test_dialog_captures_navigation_keys() {
    let mut state = state_with(vec![test_run("a", RunStatus::Success, 100)]);
    press(&mut state, InputKey::Char('d'));
    assert!(handle_key(&state, InputKey::Char('j')).is_none());
    assert!(handle_key(&state, InputKey::Char('r')).is_none());
}

#[test]
fn test_filter_keys_reset_page() {
    let runs = (1..=12)
        .map(|i| test_run(&format!("run-{}", i), RunStatus::Pending, 0))
        .collect();
    let mut state = state_with(runs);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Char('l'));
    assert_eq!(state.view.page(), 3);

    press(&mut state, InputKey::Char('1'));
    assert_eq!(state.view.page(), 1);
    assert!(state.view.status_filter.is_selected(DisplayStatus::Pending));

    press(&mut state, InputKey::Char('0'));
    assert!(!state.view.status_filter.is_selected(DisplayStatus::Pending));
}

// ─────────────────────────────────────────────────────────
// Refresh
// ─────────────────────────────────────────────────────────

#[test]
fn test_manual_refresh_returns_action() {
    let mut state = AppState::new();
    let actions = press(&mut state, InputKey::Char('r'));
    assert_eq!(actions, vec![UpdateAction::RefreshRuns { seq: 1 }]);
    assert!(state.refresh.is_refreshing());
}

#[test]
fn test_manual_refresh_ignored_while_refreshing() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('r'));
    assert!(press(&mut state, InputKey::Char('r')).is_empty());
}

#[test]
fn test_poll_tick_always_refreshes() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('r'));
    let actions = run(&mut state, Message::PollTick);
    assert_eq!(actions, vec![UpdateAction::RefreshRuns { seq: 2 }]);
}

#[test]
fn test_refresh_failure_keeps_list() {
    let mut state = state_with(vec![test_run("a", RunStatus::Success, 100)]);
    run(&mut state, Message::RequestRefresh);
    run(
        &mut state,
        Message::RefreshFailed {
            seq: 1,
            error: "HTTP 503".to_string(),
        },
    );
    assert_eq!(state.runs.len(), 1);
    assert_eq!(state.refresh.error(), Some("HTTP 503"));
    assert!(!state.refresh.is_refreshing());
}

#[test]
fn test_stale_refresh_does_not_overwrite_newer_list() {
    let mut state = AppState::new();
    run(&mut state, Message::PollTick);
    run(&mut state, Message::PollTick);

    run(
        &mut state,
        Message::RunsRefreshed {
            seq: 2,
            runs: vec![test_run("new", RunStatus::Pending, 10)],
        },
    );
    run(
        &mut state,
        Message::RunsRefreshed {
            seq: 1,
            runs: vec![test_run("old", RunStatus::Pending, 0)],
        },
    );

    assert_eq!(state.runs.len(), 1);
    assert_eq!(state.runs[0].id, "new");
}

#[test]
fn test_refresh_clamps_page() {
    let runs = (1..=7)
        .map(|i| test_run(&format!("run-{}", i), RunStatus::Pending, 0))
        .collect();
    let mut state = state_with(runs);
    run(&mut state, Message::NextPage);
    assert_eq!(state.view.page(), 2);

    run(&mut state, Message::RequestRefresh);
    run(
        &mut state,
        Message::RunsRefreshed {
            seq: 1,
            runs: vec![test_run("run-1", RunStatus::Pending, 0)],
        },
    );
    assert_eq!(state.view.page(), 1);
}

// ─────────────────────────────────────────────────────────
// Cancel / delete
// ─────────────────────────────────────────────────────────

#[test]
fn test_delete_opens_confirm_and_no_closes_without_call() {
    let mut state = state_with(vec![test_run("done", RunStatus::Success, 100)]);

    let actions = press(&mut state, InputKey::Char('d'));
    assert!(actions.is_empty());
    assert_eq!(state.active_dialog().unwrap().title, "Confirm Delete");

    let actions = press(&mut state, InputKey::Char('n'));
    assert!(actions.is_empty());
    assert!(!state.has_dialog());
    assert_eq!(state.runs.len(), 1);
}

#[test]
fn test_esc_also_dismisses_confirm() {
    let mut state = state_with(vec![test_run("done", RunStatus::Success, 100)]);
    press(&mut state, InputKey::Char('d'));
    assert!(press(&mut state, InputKey::Esc).is_empty());
    assert!(state.delete_flow.is_closed());
}

#[test]
fn test_confirmed_delete_then_dismiss_refreshes() {
    let mut state = state_with(vec![
        test_run("done", RunStatus::Success, 100),
        test_run("other", RunStatus::Error, 30),
    ]);

    press(&mut state, InputKey::Char('d'));
    let actions = press(&mut state, InputKey::Char('y'));
    assert_eq!(
        actions,
        vec![UpdateAction::DeleteRun {
            run_id: "done".to_string()
        }]
    );
    assert!(!state.has_dialog());

    run(
        &mut state,
        Message::ActionCompleted {
            kind: RunAction::Delete,
            run_id: "done".to_string(),
        },
    );
    assert_eq!(state.active_dialog().unwrap().title, "Delete Successful");

    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions, vec![UpdateAction::RefreshRuns { seq: 1 }]);

    run(
        &mut state,
        Message::RunsRefreshed {
            seq: 1,
            runs: vec![test_run("other", RunStatus::Error, 30)],
        },
    );
    assert!(state.runs.iter().all(|r| r.id != "done"));
}

#[test]
fn test_failed_action_shows_dialog_without_refresh() {
    let mut state = state_with(vec![test_run("p", RunStatus::Pending, 20)]);
    press(&mut state, InputKey::Char('c'));
    assert_eq!(
        press(&mut state, InputKey::Enter),
        vec![UpdateAction::CancelRun {
            run_id: "p".to_string()
        }]
    );

    run(
        &mut state,
        Message::ActionFailed {
            kind: RunAction::Cancel,
            run_id: "p".to_string(),
            error: "HTTP 500".to_string(),
        },
    );
    assert_eq!(state.active_dialog().unwrap().title, "Cancel Failed");

    assert!(press(&mut state, InputKey::Enter).is_empty());
    assert!(!state.has_dialog());
    assert!(!state.refresh.is_refreshing());
}

#[test]
fn test_cancel_and_delete_complete_independently() {
    let mut state = state_with(vec![
        test_run("live", RunStatus::Pending, 40),
        test_run("done", RunStatus::Success, 100),
    ]);

    press(&mut state, InputKey::Char('c'));
    let cancel = press(&mut state, InputKey::Char('y'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('d'));
    let delete = press(&mut state, InputKey::Char('y'));

    assert_eq!(
        [cancel, delete].concat(),
        vec![
            UpdateAction::CancelRun {
                run_id: "live".to_string()
            },
            UpdateAction::DeleteRun {
                run_id: "done".to_string()
            },
        ]
    );
    assert_eq!(state.actions_in_flight(), 2);

    // Delete answers first with a failure, then cancel succeeds
    run(
        &mut state,
        Message::ActionFailed {
            kind: RunAction::Delete,
            run_id: "done".to_string(),
            error: "HTTP 500".to_string(),
        },
    );
    assert!(state.cancel_flow.is_in_flight());
    run(
        &mut state,
        Message::ActionCompleted {
            kind: RunAction::Cancel,
            run_id: "live".to_string(),
        },
    );
    assert_eq!(state.actions_in_flight(), 0);

    assert_eq!(state.active_dialog().unwrap().title, "Delete Failed");
    assert!(press(&mut state, InputKey::Enter).is_empty());
    assert_eq!(state.active_dialog().unwrap().title, "Cancel Successful");
    assert_eq!(
        press(&mut state, InputKey::Enter),
        vec![UpdateAction::RefreshRuns { seq: 1 }]
    );
    assert!(!state.has_dialog());
}

#[test]
fn test_second_delete_opens_while_first_in_flight() {
    let mut state = state_with(vec![
        test_run("a", RunStatus::Success, 100),
        test_run("b", RunStatus::Error, 10),
    ]);

    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Char('y'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('d'));

    assert_eq!(state.active_dialog().unwrap().title, "Confirm Delete");
    assert_eq!(
        press(&mut state, InputKey::Char('y')),
        vec![UpdateAction::DeleteRun {
            run_id: "b".to_string()
        }]
    );
    assert_eq!(state.actions_in_flight(), 2);

    run(
        &mut state,
        Message::ActionCompleted {
            kind: RunAction::Delete,
            run_id: "b".to_string(),
        },
    );
    let in_flight: Vec<_> = state
        .delete_flow
        .in_flight()
        .iter()
        .map(|t| t.run_id.as_str())
        .collect();
    assert_eq!(in_flight, vec!["a"]);
}

#[test]
fn test_cancel_never_offered_for_finished_runs() {
    for status in [RunStatus::Success, RunStatus::Error, RunStatus::Cancelled] {
        let mut state = state_with(vec![test_run("x", status, 100)]);
        press(&mut state, InputKey::Char('c'));
        assert!(!state.has_dialog(), "{status}");
    }
}

#[test]
fn test_delete_never_offered_for_pending_runs() {
    for progress in [0, 55] {
        let mut state = state_with(vec![test_run("x", RunStatus::Pending, progress)]);
        press(&mut state, InputKey::Char('d'));
        assert!(!state.has_dialog());
    }
}

#[test]
fn test_action_on_empty_list_is_ignored() {
    let mut state = AppState::new();
    assert!(press(&mut state, InputKey::Char('d')).is_empty());
    assert!(!state.has_dialog());
}

#[test]
fn test_action_targets_selected_row() {
    let mut state = state_with(vec![
        test_run("first", RunStatus::Success, 100),
        test_run("second", RunStatus::Success, 100),
    ]);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('d'));
    assert_eq!(
        press(&mut state, InputKey::Char('y')),
        vec![UpdateAction::DeleteRun {
            run_id: "second".to_string()
        }]
    );
}
