//! Core domain types for test-run monitoring

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored status of a test run, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Success,
    Error,
    Cancelled,
}

impl RunStatus {
    /// Wire/storage spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Success => "success",
            RunStatus::Error => "error",
            RunStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a wire status string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Some(RunStatus::Pending),
            "success" => Some(RunStatus::Success),
            "error" => Some(RunStatus::Error),
            "cancelled" => Some(RunStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as shown to the user.
///
/// `Running` is a pseudo-status: the backend still stores `pending`, but the
/// run has reported some progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    Pending,
    Running,
    Success,
    Error,
    Cancelled,
}

impl DisplayStatus {
    /// All display statuses in filter-bar order
    pub const ALL: [DisplayStatus; 5] = [
        DisplayStatus::Pending,
        DisplayStatus::Running,
        DisplayStatus::Success,
        DisplayStatus::Error,
        DisplayStatus::Cancelled,
    ];

    /// Upper-case label
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Pending => "PENDING",
            DisplayStatus::Running => "RUNNING",
            DisplayStatus::Success => "SUCCESS",
            DisplayStatus::Error => "ERROR",
            DisplayStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parse a label, accepting any casing
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single action a run offers.
///
/// Pending runs can only be cancelled; finished runs can only be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Cancel,
    Delete,
}

impl RunAction {
    pub fn label(&self) -> &'static str {
        match self {
            RunAction::Cancel => "Cancel",
            RunAction::Delete => "Delete",
        }
    }
}

/// One submitted model-evaluation job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: String,
    pub mode: String,
    pub algorithm_gid: String,
    pub algorithm_cid: String,
    pub algorithm_args: serde_json::Map<String, serde_json::Value>,
    pub test_dataset: String,
    pub model_file: String,
    pub status: RunStatus,
    /// Percent complete. Not clamped; out-of-range values are shown as-is.
    pub progress: i64,
    pub error_messages: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RunRecord {
    /// Derived display status (see [`crate::display::display_status`])
    pub fn display_status(&self) -> DisplayStatus {
        crate::display::display_status(self.status, self.progress)
    }

    /// Derived algorithm display name
    pub fn algorithm_name(&self) -> String {
        crate::display::algorithm_display_name(&self.algorithm_gid, &self.algorithm_cid)
    }

    /// The action offered for this run
    pub fn available_action(&self) -> RunAction {
        if self.status == RunStatus::Pending {
            RunAction::Cancel
        } else {
            RunAction::Delete
        }
    }

    pub fn can_cancel(&self) -> bool {
        self.available_action() == RunAction::Cancel
    }

    pub fn can_delete(&self) -> bool {
        self.available_action() == RunAction::Delete
    }
}
