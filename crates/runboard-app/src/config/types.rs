//! Configuration types for runboard
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - `PollInterval` - The selectable auto-refresh intervals

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub polling: PollingSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Test-run service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the platform API (e.g. `http://127.0.0.1:4000`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (0 = no timeout)
    #[serde(default)]
    pub request_timeout_secs: u64,
}

impl ServerSettings {
    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: 0,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4000".to_string()
}

/// Auto-refresh settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingSettings {
    /// Minutes between automatic refreshes: 1, 5, 10 or 15
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

impl PollingSettings {
    /// The configured interval, falling back to the default for unsupported values
    pub fn interval(&self) -> PollInterval {
        PollInterval::from_minutes(self.interval_minutes).unwrap_or_else(|| {
            warn!(
                "Unsupported polling interval {} minutes, using {}",
                self.interval_minutes,
                PollInterval::default().label()
            );
            PollInterval::default()
        })
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
        }
    }
}

fn default_interval_minutes() -> u64 {
    PollInterval::default().minutes()
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while a cancel/delete request is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_true() -> bool {
    true
}

/// Auto-refresh interval choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollInterval {
    #[default]
    OneMinute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
}

impl PollInterval {
    pub const ALL: [PollInterval; 4] = [
        PollInterval::OneMinute,
        PollInterval::FiveMinutes,
        PollInterval::TenMinutes,
        PollInterval::FifteenMinutes,
    ];

    pub fn minutes(&self) -> u64 {
        match self {
            PollInterval::OneMinute => 1,
            PollInterval::FiveMinutes => 5,
            PollInterval::TenMinutes => 10,
            PollInterval::FifteenMinutes => 15,
        }
    }

    pub fn from_minutes(minutes: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.minutes() == minutes)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.minutes() * 60)
    }

    /// Cycle to the next interval (wraps around)
    pub fn cycle(self) -> Self {
        match self {
            PollInterval::OneMinute => PollInterval::FiveMinutes,
            PollInterval::FiveMinutes => PollInterval::TenMinutes,
            PollInterval::TenMinutes => PollInterval::FifteenMinutes,
            PollInterval::FifteenMinutes => PollInterval::OneMinute,
        }
    }

    pub fn label(&self) -> String {
        match self.minutes() {
            1 => "1 minute".to_string(),
            n => format!("{} minutes", n),
        }
    }
}
