//! Display formatting for test runs
//!
//! Pure functions mapping raw run fields to the text shown in the dashboard.
//! Nothing here alters stored state.

use chrono::{DateTime, Utc};

use crate::types::{DisplayStatus, RunStatus};

/// Estimate shown while a run is in its first few percent
pub const ETA_CALCULATING: &str = "Calculating…";

/// Estimate shown for any run past the first few percent
pub const ETA_FEW_MINUTES: &str = "A few minutes";

/// Estimate shown when no estimate applies
pub const ETA_UNKNOWN: &str = "Unknown";

/// Progress below this percentage is still "calculating"
const ETA_CALCULATING_BELOW: i64 = 5;

/// Gauge width used for a run that has not reported progress yet
const MIN_VISIBLE_FILL: i64 = 5;

/// Derive the display status from stored status and progress.
///
/// A pending run that has reported progress is shown as `RUNNING`.
pub fn display_status(status: RunStatus, progress: i64) -> DisplayStatus {
    match status {
        RunStatus::Pending if progress > 0 => DisplayStatus::Running,
        RunStatus::Pending => DisplayStatus::Pending,
        RunStatus::Success => DisplayStatus::Success,
        RunStatus::Error => DisplayStatus::Error,
        RunStatus::Cancelled => DisplayStatus::Cancelled,
    }
}

/// Human-readable algorithm name.
///
/// Uses the last `.`-separated segment of the group id, falling back to the
/// component id when that segment is empty. Underscores become spaces.
///
/// ```
/// use runboard_core::display::algorithm_display_name;
///
/// assert_eq!(
///     algorithm_display_name("aiverify.fairness.statistical_parity", "sp"),
///     "statistical parity"
/// );
/// ```
pub fn algorithm_display_name(gid: &str, cid: &str) -> String {
    let last = gid.rsplit('.').next().unwrap_or_default();
    let name = if last.is_empty() { cid } else { last };
    name.replace('_', " ")
}

/// Rough time-remaining label. No rate-based estimation is performed.
pub fn estimated_time_remaining(progress: i64) -> &'static str {
    if progress <= 0 || progress >= 100 {
        ETA_UNKNOWN
    } else if progress < ETA_CALCULATING_BELOW {
        ETA_CALCULATING
    } else {
        ETA_FEW_MINUTES
    }
}

/// Percentage of the progress bar to fill.
///
/// Zero progress still draws a thin sliver; any other value is used as-is.
pub fn progress_fill_percent(progress: i64) -> i64 {
    if progress == 0 {
        MIN_VISIBLE_FILL
    } else {
        progress
    }
}

/// Relative "last updated" label for a fetch completed at `then`.
pub fn last_updated_label(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(then).num_seconds().max(0);
    if secs < 5 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{} seconds ago", secs)
    } else if secs < 120 {
        "1 minute ago".to_string()
    } else {
        format!("{} minutes ago", secs / 60)
    }
}
