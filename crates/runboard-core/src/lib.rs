//! # runboard-core - Core Domain Types
//!
//! Foundation crate for runboard. Provides the test-run domain types, display
//! formatting, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RunRecord`] - One submitted model-evaluation job
//! - [`RunStatus`] - Stored status (pending, success, error, cancelled)
//! - [`DisplayStatus`] - Status shown to the user, including the derived `RUNNING`
//! - [`RunAction`] - The single action (cancel or delete) a run offers
//!
//! ### Display Formatting (`display`)
//! - [`display_status()`], [`algorithm_display_name()`]
//! - [`estimated_time_remaining()`], [`progress_fill_percent()`]
//! - [`last_updated_label()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use runboard_core::prelude::*;
//! ```

pub mod display;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all runboard crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use display::{
    algorithm_display_name, display_status, estimated_time_remaining, last_updated_label,
    progress_fill_percent,
};
pub use error::{Error, Result};
pub use types::{DisplayStatus, RunAction, RunRecord, RunStatus};
