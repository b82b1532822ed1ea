use crate::{AppError, config::Config};

use std::fs;

use tempfile::TempDir;

/// WHAT: Missing config file is created with defaults
/// WHY: First launch must work without any setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_loading_then_default_created_on_disk() {
    // Given: Empty directory
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults returned and written
    assert!(path.is_file());
    assert_eq!(config.monitor.poll_interval_ms, 3_000);
    assert_eq!(config.monitor.probe_timeout_ms, 2_000);
    assert!(config.preferences.show_notifications);
    assert!(!config.preferences.autostart);
    assert!(config.assets.icons_dir.is_none());
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Partial files fall back to defaults for missing keys
/// WHY: Older config files must keep loading
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_loading_then_missing_keys_defaulted() {
    // Given: Only one key present
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[preferences]\nshow_notifications = false\n").unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Given key kept, others default
    assert!(!config.preferences.show_notifications);
    assert_eq!(config.monitor.poll_interval_ms, 3_000);
    assert_eq!(config.monitor.empty_timeout_ms, 60_000);
}

/// WHAT: Malformed TOML is a config error
/// WHY: Startup must fail fast instead of running with guesses
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[monitor\npoll_interval_ms = ").unwrap();

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Zero intervals are rejected
/// WHY: A zero poll period would spin the event loop
#[test]
fn given_zero_interval_when_validating_then_config_error() {
    let mut config = Config::default();
    config.monitor.poll_interval_ms = 0;

    let result = config.validate();

    assert!(matches!(result, Err(AppError::ConfigError { .. })));
    assert!(Config::default().validate().is_ok());
}

/// WHAT: The default poll interval is the monitor core's interval
/// WHY: One source of truth for the polling period
#[test]
fn given_default_config_when_reading_interval_then_matches_core_default() {
    let config = Config::default();

    assert_eq!(
        config.monitor.poll_interval(),
        binwatch_core::DEFAULT_POLL_INTERVAL
    );
}
