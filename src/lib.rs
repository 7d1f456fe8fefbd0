//! runboard Library
//!
//! Terminal dashboard for monitoring model-evaluation test runs. The TUI
//! lives in `runboard-tui`; this crate adds the headless JSON mode.

pub mod headless;

pub use headless::{run_headless, HeadlessEvent, HeadlessQuery};
pub use runboard_tui::run;
