//! Simulated latency — fixed delays standing in for calls that never
//! happen, and the gates that keep one operation in flight at a time.

use std::time::Duration;

/// List refresh delay (~1s).
pub const REFRESH_LATENCY: Duration = Duration::from_millis(1000);

/// Per-card action delay (~1s).
pub const ACTION_LATENCY: Duration = Duration::from_millis(1000);

/// Assistant reply delay (~1.5s).
pub const REPLY_LATENCY: Duration = Duration::from_millis(1500);

/// A single-slot gate. Mirrors the disabled-button contract: while an
/// operation is in flight, starting another through the same gate fails.
/// Timers behind a gate are fire-and-forget and cannot be cancelled.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    busy: bool,
}

impl Gate {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Take the gate. Returns false if it is already held.
    pub fn acquire(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn release(&mut self) {
        self.busy = false;
    }
}
