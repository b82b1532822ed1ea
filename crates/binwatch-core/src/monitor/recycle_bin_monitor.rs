//! Presentation state machine for the bin.
//!
//! All bin-state mutations go through [`RecycleBinMonitor::sync`], which is
//! the only place that reads the probe and writes [`BinState`].

use crate::{
    ActionResult, BinState, MonitorContext, Notification, PreferenceKey, classify_empty_code,
    monitor::messages,
};

use tracing::{debug, info, instrument, warn};

/// How a failed probe is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureReport {
    /// Notify once per failure streak.
    Notify,
    /// Log only. Used when resynchronizing after a user action, which
    /// already produced its own notification.
    LogOnly,
}

/// Result of [`RecycleBinMonitor::empty_bin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyOutcome {
    /// The executor answered with a code, classified here.
    Completed(ActionResult),
    /// The executor itself faulted.
    Faulted,
}

/// Owns the bin presentation state and maps action results to feedback.
///
/// Single-threaded: every entry point runs to completion on the event-loop
/// thread before the next one starts.
pub struct RecycleBinMonitor {
    pub(crate) ctx: MonitorContext,
    state: BinState,
    probe_failing: bool,
}

impl RecycleBinMonitor {
    /// Create a monitor in the [`BinState::Unknown`] state.
    pub fn new(ctx: MonitorContext) -> Self {
        Self {
            ctx,
            state: BinState::Unknown,
            probe_failing: false,
        }
    }

    /// Current presentation state.
    pub fn state(&self) -> BinState {
        self.state
    }

    /// Probe the bin and update state and icon.
    ///
    /// A failed probe keeps the previous state and icon. Only the first
    /// failure of a consecutive streak produces a notification.
    #[instrument(skip(self))]
    pub fn refresh(&mut self) -> BinState {
        self.sync(FailureReport::Notify)
    }

    /// Timer entry point. Silent on success, failures still notify.
    #[instrument(skip(self))]
    pub fn periodic_tick(&mut self) -> BinState {
        debug!("Periodic bin poll");
        self.sync(FailureReport::Notify)
    }

    /// Empty the bin, notify the outcome, then resynchronize.
    #[instrument(skip(self))]
    pub fn empty_bin(&mut self) -> EmptyOutcome {
        let outcome = match self.ctx.executor.empty() {
            Ok(code) => {
                let result = classify_empty_code(code);
                match result {
                    ActionResult::Success => {
                        info!(code, "Bin emptied");
                        self.notify(messages::emptied());
                    }
                    ActionResult::Failure(code) => {
                        warn!(code, "Bin empty request returned failure code");
                        self.notify(messages::empty_failed(code));
                    }
                }
                EmptyOutcome::Completed(result)
            }
            Err(e) => {
                warn!(error = ?e, "Bin empty request faulted");
                self.notify(messages::empty_faulted(e.detail()));
                EmptyOutcome::Faulted
            }
        };

        self.sync(FailureReport::LogOnly);

        outcome
    }

    /// Open the bin view. Returns `true` on success.
    ///
    /// Never touches the presentation state.
    #[instrument(skip(self))]
    pub fn open_bin(&self) -> bool {
        match self.ctx.viewer.open() {
            Ok(()) => {
                info!("Opened bin view");
                true
            }
            Err(e) => {
                warn!(error = ?e, "Failed to open bin view");
                self.notify(messages::open_faulted(e.detail()));
                false
            }
        }
    }

    fn sync(&mut self, report: FailureReport) -> BinState {
        match self.ctx.probe.probe() {
            Ok(status) => {
                let next = BinState::from_status(status);

                if self.probe_failing {
                    info!("Bin probe recovered");
                    self.probe_failing = false;
                }

                if next != self.state {
                    info!(
                        from = ?self.state,
                        to = ?next,
                        item_count = status.item_count,
                        "Bin state changed"
                    );
                }

                self.state = next;
                if let Some(asset) = next.icon() {
                    self.ctx.icon.set_icon(asset);
                }
            }
            Err(e) => {
                warn!(error = ?e, state = ?self.state, "Bin probe failed, keeping previous state");

                if report == FailureReport::Notify && !self.probe_failing {
                    self.probe_failing = true;
                    self.notify(messages::probe_failed());
                }
            }
        }

        self.state
    }

    /// Show a notification if the user currently allows them.
    ///
    /// The preference is read on every call, never cached.
    pub(crate) fn notify(&self, notification: Notification) {
        if self
            .ctx
            .settings
            .get_preference(PreferenceKey::ShowNotifications)
        {
            self.ctx.notifier.show(&notification);
        } else {
            debug!(title = %notification.title, "Notification suppressed by preference");
        }
    }
}
