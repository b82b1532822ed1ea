//! Contracts for the external collaborators the monitor drives.
//!
//! Every call is synchronous and runs on the event-loop thread. Faults are
//! returned as [`BinError`](crate::BinError) values, never raised.

mod context;
mod notification;

pub use {context::MonitorContext, notification::Notification};

use crate::{BinStatus, CoreResult, IconAsset, PreferenceKey, ResultCode};

/// Read-only query of the bin's current item count.
pub trait BinStatusProbe {
    /// Probe the bin. A fault leaves the presentation state untouched.
    fn probe(&self) -> CoreResult<BinStatus>;
}

/// Removes every item from the bin.
pub trait BinActionExecutor {
    /// Request emptying. The returned code is classified by
    /// [`classify_empty_code`](crate::classify_empty_code); an `Err` means
    /// the request itself could not be made.
    fn empty(&self) -> CoreResult<ResultCode>;
}

/// Opens a user-facing view of the bin.
pub trait BinViewer {
    /// Open the bin view.
    fn open(&self) -> CoreResult<()>;
}

/// OS-level registration to launch at login.
pub trait AutostartController {
    /// Whether the process is currently registered.
    fn is_registered(&self) -> bool;
    /// Register. Returns `true` on success.
    fn enable(&self) -> bool;
    /// Unregister. Returns `true` on success.
    fn disable(&self) -> bool;
}

/// Durable key/value store for the boolean preferences.
pub trait SettingsStore {
    /// Current value, falling back to the key's default.
    fn get_preference(&self, key: PreferenceKey) -> bool;
    /// Store a value. Cannot fail from the caller's point of view.
    fn set_preference(&mut self, key: PreferenceKey, value: bool);
}

/// Displays transient notifications. Fire-and-forget.
pub trait NotificationSink {
    /// Show a notification.
    fn show(&self, notification: &Notification);
}

/// The tray icon widget.
pub trait IconSink {
    /// Switch the displayed icon.
    fn set_icon(&self, asset: IconAsset);
}
