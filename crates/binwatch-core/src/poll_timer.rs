use std::time::{Duration, Instant};

/// Default polling period.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// A single recurring deadline.
///
/// The owner waits until [`next_deadline`](Self::next_deadline), runs one
/// complete tick, then calls [`reschedule`](Self::reschedule). Ticks never
/// overlap because the next deadline only exists once the previous tick
/// has returned.
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval: Duration,
    next_deadline: Instant,
}

impl PollTimer {
    /// Create a timer whose first deadline is one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_deadline: now + interval,
        }
    }

    /// Polling period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due.
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Whether the tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// Schedule the next tick one interval after `now`.
    ///
    /// Anchoring on `now` rather than on the missed deadline drops ticks
    /// that were skipped while the loop was busy instead of bursting them.
    pub fn reschedule(&mut self, now: Instant) {
        self.next_deadline = now + self.interval;
    }
}
