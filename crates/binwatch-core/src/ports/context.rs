use crate::{
    AutostartController, BinActionExecutor, BinStatusProbe, BinViewer, IconSink,
    NotificationSink, SettingsStore,
};

/// Everything the monitor talks to, constructed once at startup.
///
/// Replaces process-wide handles: the monitor owns this context and every
/// handler reaches collaborators through it.
pub struct MonitorContext {
    /// Bin item-count query.
    pub probe: Box<dyn BinStatusProbe>,
    /// Bin empty operation.
    pub executor: Box<dyn BinActionExecutor>,
    /// Bin view launcher.
    pub viewer: Box<dyn BinViewer>,
    /// Login autostart registration.
    pub autostart: Box<dyn AutostartController>,
    /// Persisted preferences.
    pub settings: Box<dyn SettingsStore>,
    /// Notification display.
    pub notifier: Box<dyn NotificationSink>,
    /// Tray icon widget.
    pub icon: Box<dyn IconSink>,
}
