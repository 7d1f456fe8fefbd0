//! HTTP implementation of the test-run service
//!
//! Endpoints (relative to the configured base URL):
//! - `GET    test_runs/`            list all runs
//! - `POST   test_runs/{id}/cancel` cancel a pending run
//! - `DELETE test_runs/{id}`        delete a run

use std::time::Duration;

use reqwest::{Client, Method, Response};
use url::Url;

use runboard_core::prelude::*;
use runboard_core::RunRecord;

use crate::protocol::decode_run_list;
use crate::service::RunService;

const RUNS_SEGMENT: &str = "test_runs";
const CANCEL_SEGMENT: &str = "cancel";

/// [`RunService`] backed by the platform's JSON HTTP API
#[derive(Debug, Clone)]
pub struct HttpRunService {
    base_url: Url,
    client: Client,
}

impl HttpRunService {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded; the backend may still
    /// impose its own limits.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| Error::invalid_url(base_url, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_url(base_url, "scheme must be http or https"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: parsed,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/test_runs/`
    pub(crate) fn runs_url(&self) -> Result<Url> {
        self.url_with(&[RUNS_SEGMENT, ""])
    }

    /// `{base}/test_runs/{id}`
    pub(crate) fn run_url(&self, run_id: &str) -> Result<Url> {
        self.url_with(&[RUNS_SEGMENT, run_id])
    }

    /// `{base}/test_runs/{id}/cancel`
    pub(crate) fn cancel_url(&self, run_id: &str) -> Result<Url> {
        self.url_with(&[RUNS_SEGMENT, run_id, CANCEL_SEGMENT])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::invalid_url(self.base_url.as_str(), "cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url) -> Result<Response> {
        debug!("{} {}", method, url);
        let response = self
            .client
            .request(method, url.clone())
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::http_status(status.as_u16(), url.as_str()))
        }
    }
}

impl RunService for HttpRunService {
    async fn list_runs(&self) -> Result<Vec<RunRecord>> {
        let url = self.runs_url()?;
        let body = self
            .send(Method::GET, url)
            .await?
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read response body: {}", e)))?;
        let runs = decode_run_list(&body)?;
        debug!("Fetched {} test runs", runs.len());
        Ok(runs)
    }

    async fn cancel_run(&self, run_id: &str) -> Result<()> {
        let url = self.cancel_url(run_id)?;
        self.send(Method::POST, url).await?;
        info!("Cancelled test run {}", run_id);
        Ok(())
    }

    async fn delete_run(&self, run_id: &str) -> Result<()> {
        let url = self.run_url(run_id)?;
        self.send(Method::DELETE, url).await?;
        info!("Deleted test run {}", run_id);
        Ok(())
    }
}
