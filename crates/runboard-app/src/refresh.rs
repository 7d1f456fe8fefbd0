//! Refresh bookkeeping for the run list
//!
//! Tracks in-flight fetches, the last applied response, the last error and the
//! auto-refresh timer. The fetches themselves run as background tasks (see
//! `actions`); this module only decides whether a response may be applied.
//!
//! Every fetch carries a sequence number. A response is applied only when its
//! number is greater than the last applied one, so a slow response can never
//! overwrite a newer list.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::config::PollInterval;

/// Whether a fetch is currently outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Refreshing,
}

/// Identity of a running poll timer.
///
/// A timer is re-created whenever this key changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTimerKey {
    pub interval: PollInterval,
    pub record_count: usize,
}

/// Handle to a spawned poll timer task
#[derive(Debug, Clone)]
pub struct PollTimer {
    pub key: PollTimerKey,
    /// Arc because `watch::Sender` is not `Clone`
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl PollTimer {
    pub fn new(key: PollTimerKey, shutdown_tx: Arc<watch::Sender<bool>>) -> Self {
        Self { key, shutdown_tx }
    }

    /// Signal the timer task to exit. Requests it already started keep running.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

#[derive(Debug)]
pub struct RefreshController {
    interval: PollInterval,
    next_seq: u64,
    last_applied: u64,
    in_flight: usize,
    last_updated: Option<DateTime<Utc>>,
    error: Option<String>,
    timer: Option<PollTimer>,
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new(PollInterval::default())
    }
}

impl RefreshController {
    pub fn new(interval: PollInterval) -> Self {
        Self {
            interval,
            next_seq: 0,
            last_applied: 0,
            in_flight: 0,
            last_updated: None,
            error: None,
            timer: None,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        if self.in_flight > 0 {
            RefreshPhase::Refreshing
        } else {
            RefreshPhase::Idle
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase() == RefreshPhase::Refreshing
    }

    pub fn interval(&self) -> PollInterval {
        self.interval
    }

    pub fn set_interval(&mut self, interval: PollInterval) {
        self.interval = interval;
    }

    pub fn cycle_interval(&mut self) -> PollInterval {
        self.interval = self.interval.cycle();
        self.interval
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// "Last updated" text relative to `now`
    pub fn last_updated_label(&self, now: DateTime<Utc>) -> Option<String> {
        self.last_updated
            .map(|then| runboard_core::last_updated_label(now, then))
    }

    /// Record the outcome of the snapshot fetched before the first frame
    pub fn seed(&mut self, outcome: std::result::Result<DateTime<Utc>, String>) {
        match outcome {
            Ok(at) => {
                self.last_updated = Some(at);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }

    /// Start a fetch and return its sequence number
    pub fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.in_flight += 1;
        self.next_seq
    }

    /// Start a user-requested fetch, unless one is already running
    pub fn try_begin_manual(&mut self) -> Option<u64> {
        if self.is_refreshing() {
            None
        } else {
            Some(self.begin())
        }
    }

    /// A fetch succeeded. Returns whether its list should replace the current one.
    pub fn complete_success(&mut self, seq: u64, at: DateTime<Utc>) -> bool {
        if !self.finish(seq) {
            return false;
        }
        self.last_updated = Some(at);
        self.error = None;
        true
    }

    /// A fetch failed. Returns whether the error should be shown.
    pub fn complete_failure(&mut self, seq: u64, error: impl Into<String>) -> bool {
        if !self.finish(seq) {
            return false;
        }
        self.error = Some(error.into());
        true
    }

    fn finish(&mut self, seq: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if seq <= self.last_applied {
            return false;
        }
        self.last_applied = seq;
        true
    }

    /// The timer that should be running for a list of `record_count` runs
    pub fn desired_timer(&self, record_count: usize) -> Option<PollTimerKey> {
        (record_count > 0).then_some(PollTimerKey {
            interval: self.interval,
            record_count,
        })
    }

    pub fn timer_key(&self) -> Option<PollTimerKey> {
        self.timer.as_ref().map(|t| t.key)
    }

    /// Install a new timer, stopping the previous one
    pub fn replace_timer(&mut self, timer: Option<PollTimer>) {
        if let Some(old) = self.timer.take() {
            old.stop();
        }
        self.timer = timer;
    }

    pub fn stop_timer(&mut self) {
        self.replace_timer(None);
    }
}
