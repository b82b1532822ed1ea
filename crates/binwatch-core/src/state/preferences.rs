/// Keys of the persisted boolean preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Whether the process is registered to start at login.
    Autostart,
    /// Whether notifications are shown at all.
    ShowNotifications,
}

impl PreferenceKey {
    /// Key name as stored by settings backends.
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceKey::Autostart => "autostart",
            PreferenceKey::ShowNotifications => "show_notifications",
        }
    }

    /// Value used when the store has never seen this key.
    pub fn default_value(self) -> bool {
        match self {
            PreferenceKey::Autostart => false,
            PreferenceKey::ShowNotifications => true,
        }
    }
}

/// Snapshot of both user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Autostart registration requested by the user.
    pub autostart_enabled: bool,
    /// Notifications are shown.
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            autostart_enabled: PreferenceKey::Autostart.default_value(),
            notifications_enabled: PreferenceKey::ShowNotifications.default_value(),
        }
    }
}

impl Preferences {
    /// Value for a single key.
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::Autostart => self.autostart_enabled,
            PreferenceKey::ShowNotifications => self.notifications_enabled,
        }
    }

    /// Overwrite a single key.
    pub fn set(&mut self, key: PreferenceKey, value: bool) {
        match key {
            PreferenceKey::Autostart => self.autostart_enabled = value,
            PreferenceKey::ShowNotifications => self.notifications_enabled = value,
        }
    }
}
