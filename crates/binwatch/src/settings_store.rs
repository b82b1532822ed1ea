use crate::config::Config;

use std::path::PathBuf;

use binwatch_core::{PreferenceKey, Preferences, SettingsStore};
use tracing::{debug, error, instrument};

/// [`SettingsStore`] backed by the `[preferences]` section of the config file.
///
/// Writes update memory first and then persist the whole file. A failed
/// write is logged and the in-memory value stays authoritative for the rest
/// of the session.
pub struct ConfigSettingsStore {
    config: Config,
    path: PathBuf,
}

impl ConfigSettingsStore {
    /// Wrap a loaded config that lives at `path`.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Snapshot of both preferences.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            autostart_enabled: self.config.preferences.autostart,
            notifications_enabled: self.config.preferences.show_notifications,
        }
    }
}

impl SettingsStore for ConfigSettingsStore {
    fn get_preference(&self, key: PreferenceKey) -> bool {
        self.preferences().get(key)
    }

    #[instrument(skip(self, key), fields(key = key.as_str()))]
    fn set_preference(&mut self, key: PreferenceKey, value: bool) {
        match key {
            PreferenceKey::Autostart => self.config.preferences.autostart = value,
            PreferenceKey::ShowNotifications => self.config.preferences.show_notifications = value,
        }

        match self.config.save_to(&self.path) {
            Ok(()) => debug!(value, "Preference persisted"),
            Err(e) => error!(error = ?e, value, "Failed to persist preference"),
        }
    }
}
