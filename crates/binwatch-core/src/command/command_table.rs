//! Explicit mapping from action identifiers to handlers.
//!
//! The UI layer only resolves which [`ActionId`] was clicked (and, for
//! checkable items, the check state after the click) and hands it here.

use crate::{ActionId, RecycleBinMonitor};

use std::collections::HashMap;

use tracing::{instrument, warn};

/// What the UI must do after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing further.
    Handled,
    /// Set the check state of a checkable item.
    SetChecked {
        /// Item to update.
        action: ActionId,
        /// Check state to show.
        checked: bool,
    },
    /// Leave the event loop with status 0.
    Quit,
}

/// Handler signature. `checked` is the item's check state after the click
/// and is ignored by non-checkable actions.
pub type CommandHandler = fn(&mut RecycleBinMonitor, bool) -> CommandOutcome;

/// Action identifier to handler table.
pub struct CommandTable {
    handlers: HashMap<ActionId, CommandHandler>,
}

impl CommandTable {
    /// Table with no handlers.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Table wired to the monitor's operations.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register(ActionId::OpenBin, open_bin);
        table.register(ActionId::EmptyBin, empty_bin);
        table.register(ActionId::ToggleAutostart, toggle_autostart);
        table.register(ActionId::ToggleNotifications, toggle_notifications);
        table.register(ActionId::Quit, quit);
        table
    }

    /// Install or replace the handler for `action`.
    pub fn register(&mut self, action: ActionId, handler: CommandHandler) {
        self.handlers.insert(action, handler);
    }

    /// Run the handler for `action`.
    #[instrument(skip(self, monitor, action), fields(action = action.name()))]
    pub fn dispatch(
        &self,
        monitor: &mut RecycleBinMonitor,
        action: ActionId,
        checked: bool,
    ) -> CommandOutcome {
        match self.handlers.get(&action) {
            Some(handler) => handler(monitor, checked),
            None => {
                warn!("No handler registered for action");
                CommandOutcome::Handled
            }
        }
    }
}

fn open_bin(monitor: &mut RecycleBinMonitor, _checked: bool) -> CommandOutcome {
    monitor.open_bin();
    CommandOutcome::Handled
}

fn empty_bin(monitor: &mut RecycleBinMonitor, _checked: bool) -> CommandOutcome {
    monitor.empty_bin();
    CommandOutcome::Handled
}

fn toggle_autostart(monitor: &mut RecycleBinMonitor, checked: bool) -> CommandOutcome {
    let outcome = monitor.set_autostart(checked);
    CommandOutcome::SetChecked {
        action: ActionId::ToggleAutostart,
        checked: outcome.checked,
    }
}

fn toggle_notifications(monitor: &mut RecycleBinMonitor, checked: bool) -> CommandOutcome {
    monitor.set_notifications(checked);
    CommandOutcome::SetChecked {
        action: ActionId::ToggleNotifications,
        checked,
    }
}

fn quit(_monitor: &mut RecycleBinMonitor, _checked: bool) -> CommandOutcome {
    CommandOutcome::Quit
}
