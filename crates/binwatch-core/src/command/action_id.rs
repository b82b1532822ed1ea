/// Identifiers of the user actions the UI can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    /// Open the bin view.
    OpenBin,
    /// Empty the bin.
    EmptyBin,
    /// Checkable: launch at login.
    ToggleAutostart,
    /// Checkable: show notifications.
    ToggleNotifications,
    /// Exit the process.
    Quit,
}

impl ActionId {
    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            ActionId::OpenBin => "open-bin",
            ActionId::EmptyBin => "empty-bin",
            ActionId::ToggleAutostart => "toggle-autostart",
            ActionId::ToggleNotifications => "toggle-notifications",
            ActionId::Quit => "quit",
        }
    }
}
