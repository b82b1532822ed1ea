use crate::logging;

use std::fs;

use tempfile::TempDir;
use tracing::error;

/// WHAT: Records queued before shutdown() reach the log file
/// WHY: Fatal exits skip destructors, the startup diagnostic must survive
#[test]
#[allow(clippy::unwrap_used)]
fn given_queued_error_when_shutting_down_then_record_on_disk() {
    // Given: A file writer with one pending record
    let dir = TempDir::new().unwrap();
    let (writer, guard) = logging::file_writer(dir.path()).unwrap();
    let mut guard = Some(guard);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        error!("Invalid config: poll_interval_ms must be greater than zero");
    });

    // When: Shutting down logging
    logging::shutdown(&mut guard);

    // Then: The guard is consumed and the record is in the daily file
    assert!(guard.is_none());
    let files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("binwatch.") && name.ends_with(".log"));
    let contents = fs::read_to_string(&files[0]).unwrap();
    assert!(contents.contains("poll_interval_ms must be greater than zero"));
}

/// WHAT: Shutting down twice is harmless
/// WHY: Both the quit path and a failed startup may reach it
#[test]
fn given_no_guard_when_shutting_down_then_noop() {
    let mut guard = None;
    logging::shutdown(&mut guard);
    assert!(guard.is_none());
}
