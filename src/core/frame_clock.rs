//! Fixed-rate tick scheduling for the driver loop.

use std::time::{Duration, Instant};

/// Paces a loop to a fixed number of ticks per second.
///
/// Each call to [`FrameClock::wait`] blocks until the next tick boundary.
/// After a stall longer than one frame the schedule restarts from "now"
/// instead of running a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = frame_period(ticks_per_second);
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick boundary, measured from `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }

    /// Block until the next tick boundary and schedule the one after it.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let remaining = self.remaining(now);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        self.next_deadline += self.period;
        if self.next_deadline + self.period < now {
            self.next_deadline = now + self.period;
        }
    }
}

/// Duration of one tick at the given rate. A zero rate is treated as one tick per second.
pub fn frame_period(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
