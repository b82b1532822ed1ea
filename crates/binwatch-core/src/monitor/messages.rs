//! User-visible notification texts.

use crate::{IconAsset, Notification, ResultCode};

const TITLE_BIN: &str = "Recycle Bin";
const TITLE_ERROR: &str = "Error";
const TITLE_AUTOSTART: &str = "Autostart";
const TITLE_NOTIFICATIONS: &str = "Notifications";

pub(crate) fn probe_failed() -> Notification {
    Notification::new(
        TITLE_ERROR,
        "Failed to obtain Recycle Bin state.",
        IconAsset::Full,
    )
}

pub(crate) fn emptied() -> Notification {
    Notification::new(
        TITLE_BIN,
        "Recycle Bin emptied successfully.",
        IconAsset::Empty,
    )
}

pub(crate) fn empty_failed(code: ResultCode) -> Notification {
    Notification::new(
        TITLE_BIN,
        format!("Failed to empty the Recycle Bin. Error code: {}", code),
        IconAsset::Full,
    )
}

pub(crate) fn empty_faulted(detail: &str) -> Notification {
    Notification::new(
        TITLE_ERROR,
        format!("Could not empty the Recycle Bin: {}", detail),
        IconAsset::Full,
    )
}

pub(crate) fn open_faulted(detail: &str) -> Notification {
    Notification::new(
        TITLE_ERROR,
        format!("Could not open the Recycle Bin: {}", detail),
        IconAsset::Full,
    )
}

pub(crate) fn autostart_enabled() -> Notification {
    Notification::new(
        TITLE_AUTOSTART,
        "Autostart enabled.",
        IconAsset::AutostartEnabled,
    )
}

pub(crate) fn autostart_enable_failed() -> Notification {
    Notification::new(
        TITLE_AUTOSTART,
        "Failed to enable autostart.",
        IconAsset::AutostartDisabled,
    )
}

pub(crate) fn autostart_disabled() -> Notification {
    Notification::new(
        TITLE_AUTOSTART,
        "Autostart disabled.",
        IconAsset::AutostartDisabled,
    )
}

pub(crate) fn autostart_disable_failed() -> Notification {
    Notification::new(
        TITLE_AUTOSTART,
        "Failed to disable autostart.",
        IconAsset::AutostartEnabled,
    )
}

pub(crate) fn notifications_enabled() -> Notification {
    Notification::new(
        TITLE_NOTIFICATIONS,
        "Notifications enabled.",
        IconAsset::NotificationsEnabled,
    )
}
