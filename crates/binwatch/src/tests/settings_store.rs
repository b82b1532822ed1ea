use crate::{config::Config, settings_store::ConfigSettingsStore};

use binwatch_core::{PreferenceKey, SettingsStore};
use tempfile::TempDir;

/// WHAT: Preference writes survive a reload
/// WHY: Preferences are durable across restarts
#[test]
#[allow(clippy::unwrap_used)]
fn given_store_when_setting_preference_then_persisted_to_file() {
    // Given: Store over a fresh config file
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let config = Config::load_from(&path).unwrap();
    let mut store = ConfigSettingsStore::new(config, path.clone());
    assert!(store.get_preference(PreferenceKey::ShowNotifications));

    // When: Turning notifications off and autostart on
    store.set_preference(PreferenceKey::ShowNotifications, false);
    store.set_preference(PreferenceKey::Autostart, true);

    // Then: Reloaded file has the new values
    let reloaded = Config::load_from(&path).unwrap();
    assert!(!reloaded.preferences.show_notifications);
    assert!(reloaded.preferences.autostart);
    assert!(!store.preferences().notifications_enabled);
}

/// WHAT: A failed persist keeps the in-memory value
/// WHY: Setting a preference cannot fail for the caller
#[test]
#[allow(clippy::unwrap_used)]
fn given_unwritable_path_when_setting_preference_then_memory_updated() {
    // Given: Path whose parent is a regular file
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let mut store = ConfigSettingsStore::new(Config::default(), blocker.join("config.toml"));

    // When: Setting a preference
    store.set_preference(PreferenceKey::ShowNotifications, false);

    // Then: Value is visible despite the failed write
    assert!(!store.get_preference(PreferenceKey::ShowNotifications));
}
