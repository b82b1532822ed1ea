use crate::config::Config;

use std::path::Path;

use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "binwatch=debug,binwatch_core=debug";

/// Install the global subscriber: stdout plus a daily log file.
///
/// The returned guard flushes the file writer when dropped. The process
/// never returns from `main`, so every exit path must drop it explicitly
/// (see [`shutdown`]). Without a usable log directory only stdout logging
/// is installed.
pub fn init() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_writer = Config::log_dir().ok().and_then(|dir| file_writer(&dir));

    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

/// Daily rolling `binwatch.<date>.log` in `dir`, written off-thread.
pub fn file_writer(dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("binwatch")
        .filename_suffix("log")
        .build(dir)
        .ok()?;

    Some(tracing_appender::non_blocking(appender))
}

/// Flush pending file records. Call right before the process ends.
pub fn shutdown(guard: &mut Option<WorkerGuard>) {
    drop(guard.take());
}
