use std::{collections::HashMap, path::PathBuf};

use binwatch_core::{IconAsset, Notification, NotificationSink};
use notify_rust::Timeout;
use tracing::{debug, warn};

const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

/// [`NotificationSink`] that shows native desktop notifications.
pub struct DesktopNotifier {
    app_name: &'static str,
    icon_paths: HashMap<IconAsset, PathBuf>,
}

impl DesktopNotifier {
    /// Create a notifier. `icon_paths` maps each asset to its file.
    pub fn new(app_name: &'static str, icon_paths: HashMap<IconAsset, PathBuf>) -> Self {
        Self {
            app_name,
            icon_paths,
        }
    }
}

impl NotificationSink for DesktopNotifier {
    fn show(&self, notification: &Notification) {
        let mut n = notify_rust::Notification::new();
        n.appname(self.app_name)
            .summary(&notification.title)
            .body(&notification.message)
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS));

        if let Some(path) = self.icon_paths.get(&notification.icon) {
            n.icon(&path.to_string_lossy());
        }

        match n.show() {
            Ok(_) => debug!(title = %notification.title, icon = notification.icon.tag(), "Notification shown"),
            Err(e) => warn!(error = ?e, title = %notification.title, "Failed to show notification"),
        }
    }
}
