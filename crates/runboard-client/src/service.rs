//! Test-run service interface
//!
//! The dashboard talks to the backend only through [`RunService`], so the
//! HTTP implementation can be swapped for an in-memory one in tests.

use runboard_core::prelude::*;
use runboard_core::RunRecord;

/// Operations offered by the test-run backend
#[trait_variant::make(RunService: Send)]
pub trait LocalRunService {
    /// Fetch every run. No filtering or pagination happens server-side.
    async fn list_runs(&self) -> Result<Vec<RunRecord>>;

    /// Ask the backend to cancel a pending run
    async fn cancel_run(&self, run_id: &str) -> Result<()>;

    /// Permanently remove a run
    async fn delete_run(&self, run_id: &str) -> Result<()>;
}
