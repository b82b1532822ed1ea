use binwatch_core::DEFAULT_POLL_INTERVAL;

mod assets_config;
#[allow(clippy::module_inception)]
mod config;
mod monitor_config;
mod preferences_config;

pub(crate) use {
    assets_config::AssetsConfig, config::Config, monitor_config::MonitorConfig,
    preferences_config::PreferencesConfig,
};

pub(crate) const DEFAULT_POLL_INTERVAL_MS: u64 = DEFAULT_POLL_INTERVAL.as_millis() as u64;
pub(crate) const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2_000;
pub(crate) const DEFAULT_EMPTY_TIMEOUT_MS: u64 = 60_000;
pub(crate) const DEFAULT_SHOW_NOTIFICATIONS: bool = true;

pub(crate) fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

pub(crate) fn default_probe_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT_MS
}

pub(crate) fn default_empty_timeout_ms() -> u64 {
    DEFAULT_EMPTY_TIMEOUT_MS
}

pub(crate) fn default_show_notifications() -> bool {
    DEFAULT_SHOW_NOTIFICATIONS
}
