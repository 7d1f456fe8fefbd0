//! Configuration file parsing for runboard
//!
//! Supports `<config_dir>/runboard/config.toml` for global settings.

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings, parse_settings};
pub use types::*;
