//! Application state (Model in TEA pattern)

use chrono::{DateTime, Utc};

use runboard_core::{RunAction, RunRecord};

use crate::action_flow::ActionFlow;
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::refresh::RefreshController;
use crate::route::RouteContext;
use crate::run_view::RunView;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    pub route: RouteContext,

    /// Full run list as last fetched; replaced wholesale
    pub runs: Vec<RunRecord>,

    pub view: RunView,

    pub refresh: RefreshController,

    pub cancel_flow: ActionFlow,

    pub delete_flow: ActionFlow,

    /// Quit confirmation, when open
    pub quit_dialog: Option<ConfirmDialogState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), RouteContext::default())
    }

    pub fn with_settings(settings: Settings, route: RouteContext) -> Self {
        let interval = settings.polling.interval();
        Self {
            phase: AppPhase::Running,
            settings,
            route,
            runs: Vec::new(),
            view: RunView::new(),
            refresh: RefreshController::new(interval),
            cancel_flow: ActionFlow::new(RunAction::Cancel),
            delete_flow: ActionFlow::new(RunAction::Delete),
            quit_dialog: None,
        }
    }

    /// Install the snapshot fetched before the first frame
    pub fn seed_runs(
        &mut self,
        outcome: std::result::Result<(Vec<RunRecord>, DateTime<Utc>), String>,
    ) {
        match outcome {
            Ok((runs, at)) => {
                self.runs = runs;
                self.view.clamp_to(&self.runs);
                self.refresh.seed(Ok(at));
            }
            Err(error) => self.refresh.seed(Err(error)),
        }
    }

    /// Replace the run list after an applied fetch
    pub fn apply_runs(&mut self, runs: Vec<RunRecord>) {
        self.runs = runs;
        self.view.clamp_to(&self.runs);
    }

    pub fn flow(&self, kind: RunAction) -> &ActionFlow {
        match kind {
            RunAction::Cancel => &self.cancel_flow,
            RunAction::Delete => &self.delete_flow,
        }
    }

    pub fn flow_mut(&mut self, kind: RunAction) -> &mut ActionFlow {
        match kind {
            RunAction::Cancel => &mut self.cancel_flow,
            RunAction::Delete => &mut self.delete_flow,
        }
    }

    pub fn selected_run(&self) -> Option<&RunRecord> {
        self.view.selected_run(&self.runs)
    }

    /// Number of cancel/delete requests awaiting the server
    pub fn actions_in_flight(&self) -> usize {
        self.cancel_flow.in_flight().len() + self.delete_flow.in_flight().len()
    }

    /// Dialog that currently owns keyboard input
    pub fn active_dialog(&self) -> Option<ConfirmDialogState> {
        self.quit_dialog
            .clone()
            .or_else(|| self.delete_flow.dialog())
            .or_else(|| self.cancel_flow.dialog())
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog().is_some()
    }

    /// Request quit, asking first when requests are outstanding
    pub fn request_quit(&mut self) {
        let in_flight = self.actions_in_flight();
        if self.settings.behavior.confirm_quit && in_flight > 0 {
            self.quit_dialog = Some(ConfirmDialogState::quit_confirmation(in_flight));
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.quit_dialog = None;
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.quit_dialog = None;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
