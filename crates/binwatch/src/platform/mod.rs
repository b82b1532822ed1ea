//! OS collaborators for the monitor.
//!
//! Each supported OS provides a `sys` module with the same surface:
//! `ensure_supported`, `item_count`, `empty_bin`, `BIN_VIEW_URI` and
//! `SystemAutostart`. Probe and empty calls are routed through the
//! [`BlockingRunner`] so they never block the event loop unbounded.

#[cfg(target_os = "linux")]
#[path = "linux.rs"]
mod sys;
#[cfg(not(any(target_os = "linux", target_os = "windows")))]
#[path = "unsupported.rs"]
mod sys;
#[cfg(target_os = "windows")]
#[path = "windows.rs"]
mod sys;

#[cfg(target_os = "linux")]
pub(crate) mod xdg_autostart;

pub(crate) use sys::{SystemAutostart, ensure_supported};

use crate::{BlockingRunner, InFlight};

use std::{rc::Rc, time::Duration};

use binwatch_core::{
    BinActionExecutor, BinError, BinStatus, BinStatusProbe, BinViewer, CoreResult, ResultCode,
};
use tracing::{debug, instrument};

/// [`BinStatusProbe`] running the OS query with a timeout.
pub struct TimedProbe {
    runner: Rc<BlockingRunner>,
    in_flight: InFlight,
    timeout: Duration,
}

impl TimedProbe {
    /// Create a probe bounded by `timeout`.
    pub fn new(runner: Rc<BlockingRunner>, timeout: Duration) -> Self {
        Self {
            runner,
            in_flight: InFlight::default(),
            timeout,
        }
    }
}

impl BinStatusProbe for TimedProbe {
    #[instrument(skip(self))]
    fn probe(&self) -> CoreResult<BinStatus> {
        let item_count = self
            .runner
            .run("probe", &self.in_flight, self.timeout, sys::item_count)
            .map_err(|e| BinError::query_failed(e.detail()))?;

        debug!(item_count, "Bin probed");

        Ok(BinStatus { item_count })
    }
}

/// [`BinActionExecutor`] running the OS empty call with a timeout.
pub struct TimedExecutor {
    runner: Rc<BlockingRunner>,
    in_flight: InFlight,
    timeout: Duration,
}

impl TimedExecutor {
    /// Create an executor bounded by `timeout`.
    pub fn new(runner: Rc<BlockingRunner>, timeout: Duration) -> Self {
        Self {
            runner,
            in_flight: InFlight::default(),
            timeout,
        }
    }
}

impl BinActionExecutor for TimedExecutor {
    #[instrument(skip(self))]
    fn empty(&self) -> CoreResult<ResultCode> {
        self.runner
            .run("empty", &self.in_flight, self.timeout, sys::empty_bin)
            .map_err(|e| BinError::action_failed("empty", e.detail()))
    }
}

/// [`BinViewer`] that hands the bin location to the desktop's opener.
pub struct ShellViewer;

impl BinViewer for ShellViewer {
    #[instrument(skip(self))]
    fn open(&self) -> CoreResult<()> {
        open::that(sys::BIN_VIEW_URI).map_err(|e| BinError::action_failed("open", e.to_string()))
    }
}
