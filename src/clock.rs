//! Wall-clock sources for the frame driver.

use std::cell::Cell;

/// Millisecond timestamps. Only differences matter to the simulation.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real time from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // Before 1970 never happens in practice; clamp instead of failing.
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Hand-driven clock for tests and the headless simulator.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
