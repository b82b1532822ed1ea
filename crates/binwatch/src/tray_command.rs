use tray_icon::menu::MenuId;

/// Events delivered to the main UI thread's event loop.
///
/// Menu clicks arrive on whatever thread the menu backend uses and are
/// forwarded here so that the monitor and `TrayManager` (`TrayIcon` is
/// `!Send`) are only touched from the loop thread.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// A tray menu item was clicked.
    MenuClicked(MenuId),
}
