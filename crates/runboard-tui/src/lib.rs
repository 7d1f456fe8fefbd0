//! runboard-tui - Terminal UI for runboard
//!
//! Ratatui front end over runboard-app: terminal setup, event polling, the
//! main loop, and the dashboard widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
