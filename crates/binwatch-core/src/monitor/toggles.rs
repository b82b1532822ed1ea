use crate::{PreferenceKey, RecycleBinMonitor, monitor::messages};

use tracing::{info, instrument, warn};

/// Result of an autostart toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the OS call succeeded.
    pub applied: bool,
    /// Check state the UI must show. Equals the previous state when the
    /// call failed.
    pub checked: bool,
}

impl RecycleBinMonitor {
    /// Register or unregister autostart, rolling back on failure.
    #[instrument(skip(self))]
    pub fn set_autostart(&mut self, desired: bool) -> ToggleOutcome {
        let applied = if desired {
            self.ctx.autostart.enable()
        } else {
            self.ctx.autostart.disable()
        };

        let notification = match (desired, applied) {
            (true, true) => messages::autostart_enabled(),
            (true, false) => messages::autostart_enable_failed(),
            (false, true) => messages::autostart_disabled(),
            (false, false) => messages::autostart_disable_failed(),
        };

        if applied {
            self.ctx
                .settings
                .set_preference(PreferenceKey::Autostart, desired);
            info!(enabled = desired, "Autostart updated");
        } else {
            warn!(desired, "Autostart change failed, rolling back");
        }

        self.notify(notification);

        ToggleOutcome {
            applied,
            checked: if applied { desired } else { !desired },
        }
    }

    /// Persist the notifications preference.
    ///
    /// Enabling confirms with a notification. Disabling is silent so the
    /// user never sees a notification saying notifications are off.
    #[instrument(skip(self))]
    pub fn set_notifications(&mut self, desired: bool) {
        self.ctx
            .settings
            .set_preference(PreferenceKey::ShowNotifications, desired);

        info!(enabled = desired, "Notifications preference updated");

        if desired {
            self.notify(messages::notifications_enabled());
        }
    }

    /// Whether notifications are currently enabled.
    pub fn notifications_enabled(&self) -> bool {
        self.ctx
            .settings
            .get_preference(PreferenceKey::ShowNotifications)
    }

    /// Whether autostart is registered with the OS right now.
    pub fn autostart_registered(&self) -> bool {
        self.ctx.autostart.is_registered()
    }
}
