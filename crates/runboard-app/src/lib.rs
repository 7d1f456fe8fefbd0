//! runboard-app - Application state and orchestration for runboard
//!
//! Implements the TEA (The Elm Architecture) loop behind the dashboard: the
//! run list, filter/sort/paginate view, refresh bookkeeping with the poll
//! timer, the cancel/delete confirmation flows, and configuration loading.

pub mod action_flow;
pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod refresh;
pub mod route;
pub mod run_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use route::RouteContext;
pub use run_view::{AlgorithmFilter, RunView, SortOption, StatusFilter, PAGE_SIZE};
pub use state::{AppPhase, AppState};
