/// Icon assets referenced by the tray icon and by notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconAsset {
    /// Bin is empty.
    Empty,
    /// Bin has items.
    Full,
    /// Autostart registration is active.
    AutostartEnabled,
    /// Autostart registration is inactive.
    AutostartDisabled,
    /// Notifications were switched on.
    NotificationsEnabled,
}

impl IconAsset {
    /// Every asset, in the order they are verified at startup.
    pub const ALL: [IconAsset; 5] = [
        IconAsset::Empty,
        IconAsset::Full,
        IconAsset::AutostartEnabled,
        IconAsset::AutostartDisabled,
        IconAsset::NotificationsEnabled,
    ];

    /// Stable tag used in logs and by notification sinks.
    pub fn tag(self) -> &'static str {
        match self {
            IconAsset::Empty => "empty",
            IconAsset::Full => "full",
            IconAsset::AutostartEnabled => "autostart-enabled",
            IconAsset::AutostartDisabled => "autostart-disabled",
            IconAsset::NotificationsEnabled => "notifications-enabled",
        }
    }

    /// File name of the asset inside the icons directory.
    pub fn file_name(self) -> &'static str {
        match self {
            IconAsset::Empty => "bin-empty.png",
            IconAsset::Full => "bin-full.png",
            IconAsset::AutostartEnabled => "autostart-enabled.png",
            IconAsset::AutostartDisabled => "autostart-disabled.png",
            IconAsset::NotificationsEnabled => "notifications-enabled.png",
        }
    }
}
