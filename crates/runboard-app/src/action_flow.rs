//! Confirm → request → result flow for cancel and delete
//!
//! Each action kind owns one [`ActionFlow`]. A single dialog slot holds the
//! open confirmation; confirmed requests move to the in-flight list, and
//! their outcomes queue up as result dialogs:
//!
//! ```text
//! request → Confirming → (confirm) → in flight → Succeeded | Failed → dismissed
//! ```
//!
//! Several requests of the same kind may be in flight at once, and a new
//! confirmation can open while earlier requests are still waiting. The two
//! flows are independent of each other and of refreshes.

use std::collections::VecDeque;

use runboard_core::{RunAction, RunRecord};

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;

/// The run an action is aimed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTarget {
    pub run_id: String,
    /// Algorithm display name, for dialog text
    pub label: String,
}

impl ActionTarget {
    pub fn from_run(run: &RunRecord) -> Self {
        Self {
            run_id: run.id.clone(),
            label: run.algorithm_name(),
        }
    }
}

/// Backend outcome awaiting acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded(ActionTarget),
    Failed { target: ActionTarget, error: String },
}

impl ActionOutcome {
    pub fn target(&self) -> &ActionTarget {
        match self {
            ActionOutcome::Succeeded(target) => target,
            ActionOutcome::Failed { target, .. } => target,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionFlow {
    kind: RunAction,
    confirming: Option<ActionTarget>,
    in_flight: Vec<ActionTarget>,
    /// Oldest first; only the front one is shown
    outcomes: VecDeque<ActionOutcome>,
}

impl ActionFlow {
    pub fn new(kind: RunAction) -> Self {
        Self {
            kind,
            confirming: None,
            in_flight: Vec::new(),
            outcomes: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> RunAction {
        self.kind
    }

    /// Nothing open, nothing waiting on the backend
    pub fn is_closed(&self) -> bool {
        self.confirming.is_none() && self.in_flight.is_empty() && self.outcomes.is_empty()
    }

    pub fn confirming(&self) -> Option<&ActionTarget> {
        self.confirming.as_ref()
    }

    /// Requests sent and not yet answered, oldest first
    pub fn in_flight(&self) -> &[ActionTarget] {
        &self.in_flight
    }

    pub fn is_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// The outcome whose dialog is currently shown
    pub fn outcome(&self) -> Option<&ActionOutcome> {
        self.outcomes.front()
    }

    fn has_dialog(&self) -> bool {
        self.confirming.is_some() || !self.outcomes.is_empty()
    }

    /// Open the confirmation for `run`.
    ///
    /// Ignored when the run does not offer this action, a dialog of this
    /// kind is already open, or a request for the same run is in flight.
    pub fn request(&mut self, run: &RunRecord) -> bool {
        if run.available_action() != self.kind
            || self.has_dialog()
            || self.in_flight.iter().any(|t| t.run_id == run.id)
        {
            return false;
        }
        self.confirming = Some(ActionTarget::from_run(run));
        true
    }

    /// Close the confirmation without doing anything
    pub fn dismiss_confirm(&mut self) -> bool {
        self.confirming.take().is_some()
    }

    /// Confirm and return the id the backend call should target
    pub fn confirm(&mut self) -> Option<String> {
        let target = self.confirming.take()?;
        let run_id = target.run_id.clone();
        self.in_flight.push(target);
        Some(run_id)
    }

    /// Record the backend outcome for `run_id`.
    ///
    /// Returns `false` when no request for `run_id` is in flight.
    pub fn complete(&mut self, run_id: &str, outcome: std::result::Result<(), String>) -> bool {
        let Some(index) = self.in_flight.iter().position(|t| t.run_id == run_id) else {
            return false;
        };
        let target = self.in_flight.remove(index);
        self.outcomes.push_back(match outcome {
            Ok(()) => ActionOutcome::Succeeded(target),
            Err(error) => ActionOutcome::Failed { target, error },
        });
        true
    }

    /// Close the shown result dialog. Returns `true` when the list should be refreshed.
    pub fn dismiss_result(&mut self) -> bool {
        if self.confirming.is_some() {
            return false;
        }
        matches!(self.outcomes.pop_front(), Some(ActionOutcome::Succeeded(_)))
    }

    /// Dialog currently open for this kind.
    ///
    /// An open confirmation takes precedence over queued results.
    pub fn dialog(&self) -> Option<ConfirmDialogState> {
        let kind = self.kind;
        if let Some(target) = &self.confirming {
            return Some(ConfirmDialogState::new(
                format!("Confirm {}", kind.label()),
                match kind {
                    RunAction::Cancel => format!("Cancel the running test '{}'?", target.label),
                    RunAction::Delete => format!("Delete the test run '{}'?", target.label),
                },
                vec![
                    ("Yes", Message::ConfirmAction(kind)),
                    ("No", Message::DismissAction(kind)),
                ],
            ));
        }

        // Requests still in flight show no dialog; the table stays usable
        match self.outcomes.front()? {
            ActionOutcome::Succeeded(target) => Some(ConfirmDialogState::new(
                format!("{} Successful", kind.label()),
                match kind {
                    RunAction::Cancel => format!("Test run '{}' was cancelled.", target.label),
                    RunAction::Delete => format!("Test run '{}' was deleted.", target.label),
                },
                vec![("OK", Message::DismissActionResult(kind))],
            )),
            ActionOutcome::Failed { target, error } => Some(ConfirmDialogState::new(
                format!("{} Failed", kind.label()),
                format!("Could not {} '{}': {}", verb(kind), target.label, error),
                vec![("OK", Message::DismissActionResult(kind))],
            )),
        }
    }
}

fn verb(kind: RunAction) -> &'static str {
    match kind {
        RunAction::Cancel => "cancel",
        RunAction::Delete => "delete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runboard_client::test_utils::test_run;
    use runboard_core::RunStatus;

    #[test]
    fn test_delete_on_pending_is_ignored() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        assert!(!flow.request(&test_run("a", RunStatus::Pending, 0)));
        assert!(!flow.request(&test_run("a", RunStatus::Pending, 30)));
        assert!(flow.is_closed());
    }

    #[test]
    fn test_cancel_only_for_pending() {
        for status in [RunStatus::Success, RunStatus::Error, RunStatus::Cancelled] {
            let mut flow = ActionFlow::new(RunAction::Cancel);
            assert!(!flow.request(&test_run("a", status, 100)));
        }
        let mut flow = ActionFlow::new(RunAction::Cancel);
        assert!(flow.request(&test_run("a", RunStatus::Pending, 20)));
    }

    #[test]
    fn test_confirm_dialog_title() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        flow.request(&test_run("a", RunStatus::Success, 100));
        let dialog = flow.dialog().unwrap();
        assert_eq!(dialog.title, "Confirm Delete");
        assert_eq!(dialog.options.len(), 2);
    }

    #[test]
    fn test_dismiss_confirm_closes() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        flow.request(&test_run("a", RunStatus::Success, 100));
        assert!(flow.dismiss_confirm());
        assert!(flow.is_closed());
        assert!(flow.dialog().is_none());
    }

    #[test]
    fn test_success_path() {
        let mut flow = ActionFlow::new(RunAction::Cancel);
        flow.request(&test_run("a", RunStatus::Pending, 0));
        assert_eq!(flow.confirm().as_deref(), Some("a"));
        assert!(flow.is_in_flight());
        assert!(flow.dialog().is_none());
        assert!(flow.confirm().is_none());
        assert!(!flow.is_closed());

        assert!(flow.complete("a", Ok(())));
        assert_eq!(flow.dialog().unwrap().title, "Cancel Successful");
        assert!(flow.dismiss_result());
        assert!(flow.is_closed());
    }

    #[test]
    fn test_failure_path_does_not_refresh() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        flow.request(&test_run("a", RunStatus::Error, 50));
        flow.confirm();
        assert!(flow.complete("a", Err("HTTP 500".to_string())));

        let dialog = flow.dialog().unwrap();
        assert_eq!(dialog.title, "Delete Failed");
        assert!(dialog.message.contains("HTTP 500"));
        assert!(!flow.dismiss_result());
        assert!(flow.is_closed());
    }

    #[test]
    fn test_completion_for_other_run_is_ignored() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        flow.request(&test_run("a", RunStatus::Success, 100));
        flow.confirm();
        assert!(!flow.complete("b", Ok(())));
        assert!(flow.is_in_flight());
    }

    #[test]
    fn test_new_confirmation_opens_while_other_run_in_flight() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        flow.request(&test_run("a", RunStatus::Success, 100));
        flow.confirm();

        assert!(flow.request(&test_run("b", RunStatus::Error, 10)));
        assert_eq!(flow.confirming().map(|t| t.run_id.as_str()), Some("b"));
        assert_eq!(flow.dialog().unwrap().title, "Confirm Delete");

        assert_eq!(flow.confirm().as_deref(), Some("b"));
        let ids: Vec<_> = flow.in_flight().iter().map(|t| t.run_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_same_run_cannot_be_requested_twice() {
        let mut flow = ActionFlow::new(RunAction::Cancel);
        let run = test_run("a", RunStatus::Pending, 0);
        flow.request(&run);
        flow.confirm();

        assert!(!flow.request(&run));
        assert!(flow.confirming().is_none());
    }

    #[test]
    fn test_out_of_order_completions_match_their_run() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        for id in ["a", "b"] {
            flow.request(&test_run(id, RunStatus::Success, 100));
            flow.confirm();
        }

        assert!(flow.complete("b", Err("HTTP 404".to_string())));
        assert_eq!(flow.in_flight().len(), 1);
        assert_eq!(flow.in_flight()[0].run_id, "a");
        assert!(flow.complete("a", Ok(())));
        assert!(!flow.is_in_flight());

        // Results are shown oldest first
        assert_eq!(flow.dialog().unwrap().title, "Delete Failed");
        assert!(!flow.dismiss_result());
        assert_eq!(flow.dialog().unwrap().title, "Delete Successful");
        assert!(flow.dismiss_result());
        assert!(flow.is_closed());
    }

    #[test]
    fn test_confirmation_shown_before_queued_result() {
        let mut flow = ActionFlow::new(RunAction::Delete);
        flow.request(&test_run("a", RunStatus::Success, 100));
        flow.confirm();
        flow.request(&test_run("b", RunStatus::Success, 100));

        flow.complete("a", Ok(()));
        assert_eq!(flow.dialog().unwrap().title, "Confirm Delete");
        assert!(!flow.dismiss_result());

        flow.dismiss_confirm();
        assert_eq!(flow.dialog().unwrap().title, "Delete Successful");
        assert_eq!(flow.outcome().map(|o| o.target().run_id.as_str()), Some("a"));
    }
}
