//! Test utilities for the test-run service
//!
//! Provides run builders and an in-memory [`RunService`] that records every
//! call, so tests can assert on exactly which backend operations happened.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use runboard_core::prelude::*;
use runboard_core::{RunRecord, RunStatus};

use crate::service::RunService;

/// Creates a test run with the given id, status and progress.
///
/// The algorithm is `aiverify.fairness.statistical_parity`.
pub fn test_run(id: &str, status: RunStatus, progress: i64) -> RunRecord {
    test_run_with_algorithm(id, status, progress, "aiverify.fairness.statistical_parity")
}

/// Creates a test run with full control over the algorithm group id.
///
/// The component id is the last segment of `gid`.
pub fn test_run_with_algorithm(
    id: &str,
    status: RunStatus,
    progress: i64,
    gid: &str,
) -> RunRecord {
    let cid = gid.rsplit('.').next().unwrap_or_default();
    RunRecord {
        id: id.to_string(),
        mode: "upload".to_string(),
        algorithm_gid: gid.to_string(),
        algorithm_cid: cid.to_string(),
        algorithm_args: serde_json::Map::new(),
        test_dataset: format!("{}-dataset.csv", id),
        model_file: format!("{}-model.pkl", id),
        status,
        progress,
        error_messages: None,
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// A backend call observed by [`InMemoryRunService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    List,
    Cancel(String),
    Delete(String),
}

#[derive(Debug, Default)]
struct Inner {
    runs: Vec<RunRecord>,
    calls: Vec<ServiceCall>,
    fail_list: Option<String>,
    fail_actions: Option<String>,
}

/// In-memory [`RunService`].
///
/// Cancel sets the run's status to `cancelled`; delete removes it. Both fail
/// for unknown ids, like the real backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRunService {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryRunService {
    pub fn new(runs: Vec<RunRecord>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                runs,
                ..Inner::default()
            })),
        }
    }

    /// Make every subsequent list call fail with `message`
    pub fn fail_list(&self, message: impl Into<String>) {
        self.lock().fail_list = Some(message.into());
    }

    /// Make every subsequent cancel/delete call fail with `message`
    pub fn fail_actions(&self, message: impl Into<String>) {
        self.lock().fail_actions = Some(message.into());
    }

    /// Replace the stored runs
    pub fn set_runs(&self, runs: Vec<RunRecord>) {
        self.lock().runs = runs;
    }

    pub fn runs(&self) -> Vec<RunRecord> {
        self.lock().runs.clone()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RunService for InMemoryRunService {
    async fn list_runs(&self) -> Result<Vec<RunRecord>> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::List);
        match &inner.fail_list {
            Some(message) => Err(Error::http(message.clone())),
            None => Ok(inner.runs.clone()),
        }
    }

    async fn cancel_run(&self, run_id: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::Cancel(run_id.to_string()));
        if let Some(message) = &inner.fail_actions {
            return Err(Error::http(message.clone()));
        }
        let run = inner
            .runs
            .iter_mut()
            .find(|r| r.id == run_id)
            .ok_or_else(|| Error::http_status(404, format!("test_runs/{}/cancel", run_id)))?;
        run.status = RunStatus::Cancelled;
        Ok(())
    }

    async fn delete_run(&self, run_id: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.calls.push(ServiceCall::Delete(run_id.to_string()));
        if let Some(message) = &inner.fail_actions {
            return Err(Error::http(message.clone()));
        }
        let before = inner.runs.len();
        inner.runs.retain(|r| r.id != run_id);
        if inner.runs.len() == before {
            return Err(Error::http_status(404, format!("test_runs/{}", run_id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_builder_defaults() {
        let run = test_run("r1", RunStatus::Pending, 0);
        assert_eq!(run.id, "r1");
        assert_eq!(run.algorithm_cid, "statistical_parity");
        assert_eq!(run.algorithm_name(), "statistical parity");
    }

    #[tokio::test]
    async fn test_in_memory_delete_removes_run() {
        let svc = InMemoryRunService::new(vec![
            test_run("a", RunStatus::Success, 100),
            test_run("b", RunStatus::Error, 30),
        ]);

        svc.delete_run("a").await.unwrap();

        let ids: Vec<_> = svc.list_runs().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["b"]);
        assert_eq!(
            svc.calls(),
            vec![ServiceCall::Delete("a".into()), ServiceCall::List]
        );
    }

    #[tokio::test]
    async fn test_in_memory_cancel_marks_cancelled() {
        let svc = InMemoryRunService::new(vec![test_run("a", RunStatus::Pending, 20)]);
        svc.cancel_run("a").await.unwrap();
        assert_eq!(svc.runs()[0].status, RunStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_in_memory_unknown_id_fails() {
        let svc = InMemoryRunService::new(vec![]);
        assert!(svc.delete_run("nope").await.is_err());
        assert!(svc.cancel_run("nope").await.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_injected_failures() {
        let svc = InMemoryRunService::new(vec![test_run("a", RunStatus::Success, 100)]);
        svc.fail_list("backend down");
        svc.fail_actions("forbidden");

        assert!(svc.list_runs().await.is_err());
        assert!(svc.delete_run("a").await.is_err());
        assert_eq!(svc.runs().len(), 1);
    }
}
