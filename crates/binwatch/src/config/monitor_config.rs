use crate::config::{default_empty_timeout_ms, default_poll_interval_ms, default_probe_timeout_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Polling and platform-call timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Period of the bin poll.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Upper bound for a single bin probe.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Upper bound for a single empty request.
    #[serde(default = "default_empty_timeout_ms")]
    pub empty_timeout_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            empty_timeout_ms: default_empty_timeout_ms(),
        }
    }
}

impl MonitorConfig {
    /// Poll period as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Empty timeout as a `Duration`.
    pub fn empty_timeout(&self) -> Duration {
        Duration::from_millis(self.empty_timeout_ms)
    }
}
