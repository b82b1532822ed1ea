//! Runs potentially blocking platform calls off the event-loop thread.
//!
//! The loop thread waits for the result with a timeout, so BinState is
//! still only written from the loop thread. A call that times out keeps
//! running on the blocking pool; its [`InFlight`] flag stays set until it
//! returns and further calls of the same operation are dropped meanwhile.

use crate::{AppError, AppResult};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::runtime::Runtime;
use tracing::{debug, error, instrument, warn};

/// Busy flag for one kind of operation.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn try_acquire(&self) -> Option<InFlightGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(Arc::clone(&self.0)))
    }
}

struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Small tokio runtime dedicated to platform calls.
pub struct BlockingRunner {
    runtime: Runtime,
}

impl BlockingRunner {
    /// Build the runtime.
    #[track_caller]
    pub fn new() -> AppResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("binwatch-platform")
            .enable_time()
            .build()
            .map_err(|e| AppError::PlatformError {
                reason: format!("Failed to create tokio runtime: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { runtime })
    }

    /// Run `call` on the blocking pool and wait at most `timeout` for it.
    #[track_caller]
    #[instrument(skip(self, in_flight, call))]
    pub fn run<T, F>(
        &self,
        operation: &'static str,
        in_flight: &InFlight,
        timeout: Duration,
        call: F,
    ) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> AppResult<T> + Send + 'static,
    {
        let location = ErrorLocation::from(Location::caller());

        let Some(guard) = in_flight.try_acquire() else {
            warn!("Previous call still running, dropping this one");
            return Err(AppError::Busy {
                operation,
                location,
            });
        };

        let handle = self.runtime.spawn_blocking(move || {
            let _guard = guard;
            call()
        });

        self.runtime.block_on(async move {
            match tokio::time::timeout(timeout, handle).await {
                Ok(Ok(result)) => {
                    debug!("Platform call finished");
                    result
                }
                Ok(Err(e)) => {
                    error!(error = ?e, "Platform call task panicked");
                    Err(AppError::PlatformError {
                        reason: format!("{} task failed: {}", operation, e),
                        location,
                    })
                }
                Err(_) => {
                    warn!(timeout_ms = timeout.as_millis(), "Platform call timed out");
                    Err(AppError::Timeout {
                        operation,
                        timeout_ms: timeout.as_millis(),
                        location,
                    })
                }
            }
        })
    }
}
