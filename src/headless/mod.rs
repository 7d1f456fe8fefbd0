//! Headless mode - JSON output instead of the TUI
//!
//! Fetches the run list once, applies the same filter/sort/paginate engine
//! the dashboard uses, and prints a single event to stdout.
//!
//! # Event Format
//!
//! Events are NDJSON (newline-delimited JSON). Each event has an "event"
//! field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"runs_page","page":1,"total_pages":2,"total":7,"page_label":"Page 1 of 2","rows":[...],"timestamp":1714555800000}
//! {"event":"fetch_failed","error":"HTTP 500 from http://127.0.0.1:4000/test_runs/","timestamp":1714555800000}
//! ```

pub mod runner;

pub use runner::{run_headless, HeadlessQuery};

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use runboard_core::{estimated_time_remaining, DisplayStatus, RunRecord};

/// One table row, rendered to display values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRow {
    pub id: String,
    pub algorithm: String,
    pub status: String,
    pub progress: i64,
    /// Only present for pending and running runs
    pub eta: Option<String>,
    pub test_dataset: String,
    pub model_file: String,
    pub created_at: String,
    pub action: String,
}

impl RunRow {
    pub fn from_run(run: &RunRecord) -> Self {
        let status = run.display_status();
        let eta = matches!(status, DisplayStatus::Pending | DisplayStatus::Running)
            .then(|| estimated_time_remaining(run.progress).to_string());

        Self {
            id: run.id.clone(),
            algorithm: run.algorithm_name(),
            status: status.label().to_string(),
            progress: run.progress,
            eta,
            test_dataset: run.test_dataset.clone(),
            model_file: run.model_file.clone(),
            created_at: run.created_at.to_rfc3339(),
            action: run.available_action().label().to_string(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One page of the filtered, sorted run list
    RunsPage {
        page: usize,
        total_pages: usize,
        /// Runs passing the filters, across all pages
        total: usize,
        page_label: String,
        rows: Vec<RunRow>,
        timestamp: i64,
    },

    /// The list request failed
    FetchFailed { error: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn runs_page(
        page: usize,
        total_pages: usize,
        total: usize,
        page_label: String,
        rows: Vec<RunRow>,
    ) -> Self {
        Self::RunsPage {
            page,
            total_pages,
            total,
            page_label,
            rows,
            timestamp: Self::now(),
        }
    }

    pub fn fetch_failed(error: impl Into<String>) -> Self {
        Self::FetchFailed {
            error: error.into(),
            timestamp: Self::now(),
        }
    }

    /// Whether the process should exit with a failure code
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}
