//! # runboard-client - Test-Run Service Client
//!
//! Talks to the model-testing platform's test-run API: list all runs, cancel a
//! pending run, delete a finished one.
//!
//! Depends on [`runboard_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`RunService`] - Async service trait (`Send` futures, via `trait-variant`)
//! - [`HttpRunService`] - `reqwest` implementation against the JSON HTTP API
//! - [`decode_run_list()`] - Lenient decoding of the list endpoint body
//!
//! With the `test-helpers` feature, `test_utils` provides an in-memory
//! service and run builders.

pub mod http;
pub mod protocol;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::HttpRunService;
pub use protocol::decode_run_list;
pub use service::{LocalRunService, RunService};
