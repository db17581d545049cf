//! Resize signal debouncing.
//!
//! Resize observers can fire on every animation frame. The debouncer keeps
//! only the latest width and releases it once no new signal has arrived for
//! the debounce duration, so the bar recomputes once per burst.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Latest width waiting to be released.
struct PendingResize {
    width: f64,
    deadline: Instant,
}

/// Thread-safe resize debouncer.
pub struct ResizeDebouncer {
    pending: Mutex<Option<PendingResize>>,
    debounce_duration: Duration,
}

impl ResizeDebouncer {
    /// Create a new debouncer with the specified debounce duration.
    #[must_use]
    pub fn new(debounce_duration: Duration) -> Self {
        Self {
            pending: Mutex::new(None),
            debounce_duration,
        }
    }

    /// Record a resize signal.
    ///
    /// Replaces any pending width and pushes the deadline back.
    pub fn record(&self, width: f64) {
        let deadline = Instant::now() + self.debounce_duration;
        *self.pending.lock().unwrap() = Some(PendingResize { width, deadline });
    }

    /// Take the pending width if its deadline has passed.
    pub fn drain_ready(&self) -> Option<f64> {
        let mut pending = self.pending.lock().unwrap();
        let now = Instant::now();

        if pending.as_ref().is_some_and(|resize| resize.deadline <= now) {
            return pending.take().map(|resize| resize.width);
        }
        None
    }

    /// Whether a width is waiting to be released.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.lock().unwrap().is_some()
    }
}
