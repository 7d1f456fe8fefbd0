//! Message types for the application (TEA pattern)

use runboard_core::{DisplayStatus, RunAction, RunRecord};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (redraws "last updated")
    Tick,

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────
    /// Quit, asking first if requests are outstanding
    RequestQuit,
    /// Quit immediately
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Table navigation
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    NextPage,
    PreviousPage,

    // ─────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────
    ToggleStatusFilter(DisplayStatus),
    ClearStatusFilter,
    CycleAlgorithmFilter,
    CycleSort,
    CycleInterval,

    // ─────────────────────────────────────────────────────────
    // Refresh
    // ─────────────────────────────────────────────────────────
    /// Manual refresh or retry
    RequestRefresh,
    /// Poll timer fired
    PollTick,
    RunsRefreshed { seq: u64, runs: Vec<RunRecord> },
    RefreshFailed { seq: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Cancel / delete
    // ─────────────────────────────────────────────────────────
    /// Open the confirmation for the selected run
    RequestAction(RunAction),
    ConfirmAction(RunAction),
    /// Close the confirmation without acting
    DismissAction(RunAction),
    ActionCompleted { kind: RunAction, run_id: String },
    ActionFailed {
        kind: RunAction,
        run_id: String,
        error: String,
    },
    /// Close the success/failure dialog
    DismissActionResult(RunAction),
}
