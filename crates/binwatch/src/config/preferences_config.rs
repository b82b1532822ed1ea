use crate::config::default_show_notifications;

use serde::{Deserialize, Serialize};

/// User preferences toggled from the tray menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Whether notifications are shown.
    #[serde(default = "default_show_notifications")]
    pub show_notifications: bool,

    /// Last autostart state the user successfully applied.
    #[serde(default)]
    pub autostart: bool,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            show_notifications: default_show_notifications(),
            autostart: false,
        }
    }
}
