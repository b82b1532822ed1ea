use crate::{AppError, BlockingRunner, InFlight};

use std::{thread::sleep, time::Duration};

/// WHAT: A fast call returns its value
/// WHY: Normal probes finish well within the timeout
#[test]
#[allow(clippy::unwrap_used)]
fn given_fast_call_when_running_then_value_returned() {
    let runner = BlockingRunner::new().unwrap();
    let in_flight = InFlight::default();

    let value = runner
        .run("probe", &in_flight, Duration::from_secs(2), || Ok(42_u64))
        .unwrap();

    assert_eq!(value, 42);
}

/// WHAT: Errors from the call are passed through unchanged
/// WHY: The monitor needs the platform's own failure detail
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_call_when_running_then_error_passed_through() {
    let runner = BlockingRunner::new().unwrap();
    let in_flight = InFlight::default();

    let result: Result<u64, _> = runner.run("probe", &in_flight, Duration::from_secs(2), || {
        Err(AppError::from(std::io::Error::other("disk gone")))
    });

    assert!(matches!(result, Err(AppError::IoError { .. })));
}

/// WHAT: A hung call times out and blocks repeats until it finishes
/// WHY: The loop thread must not wait forever, and calls must not overlap
#[test]
#[allow(clippy::unwrap_used)]
fn given_hung_call_when_running_then_timeout_then_busy_then_recovers() {
    // Given: A call that takes far longer than its timeout
    let runner = BlockingRunner::new().unwrap();
    let in_flight = InFlight::default();

    // When: Running it
    let first: Result<u64, _> =
        runner.run("probe", &in_flight, Duration::from_millis(20), || {
            sleep(Duration::from_millis(300));
            Ok(1)
        });

    // Then: Timed out, still in flight, next call dropped
    assert!(matches!(first, Err(AppError::Timeout { .. })));

    let second = runner.run("probe", &in_flight, Duration::from_secs(2), || Ok(2_u64));
    assert!(matches!(second, Err(AppError::Busy { .. })));

    // And once the hung call returns, calls go through again
    sleep(Duration::from_millis(600));
    let third = runner
        .run("probe", &in_flight, Duration::from_secs(2), || Ok(3_u64))
        .unwrap();
    assert_eq!(third, 3);
}
