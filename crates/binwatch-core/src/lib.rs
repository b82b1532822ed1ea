//! Binwatch Core Library
//!
//! State-synchronization engine for a tray-resident recycle bin monitor:
//! periodic probing of the bin, the empty/non-empty presentation state,
//! action-to-notification feedback and the preference toggles.
//!
//! All OS and UI concerns sit behind the traits in [`ports`], so the engine
//! runs unchanged against fakes.
//!
//! # Example
//!
//! ```no_run
//! use binwatch_core::{ActionId, CommandTable, MonitorContext, RecycleBinMonitor};
//!
//! fn run(ctx: MonitorContext) {
//!     let mut monitor = RecycleBinMonitor::new(ctx);
//!     let commands = CommandTable::standard();
//!
//!     monitor.refresh();
//!     commands.dispatch(&mut monitor, ActionId::EmptyBin, false);
//! }
//! ```

mod command;
mod error;
mod monitor;
pub mod ports;
mod poll_timer;
mod state;

pub use {
    command::{ActionId, CommandHandler, CommandOutcome, CommandTable},
    error::{BinError, Result as CoreResult},
    monitor::{EmptyOutcome, RecycleBinMonitor, ToggleOutcome},
    poll_timer::{DEFAULT_POLL_INTERVAL, PollTimer},
    ports::{
        AutostartController, BinActionExecutor, BinStatusProbe, BinViewer, IconSink,
        MonitorContext, Notification, NotificationSink, SettingsStore,
    },
    state::{
        ActionResult, BinState, BinStatus, IconAsset, PreferenceKey, Preferences, ResultCode,
        classify_empty_code,
    },
};

#[cfg(test)]
mod tests;
