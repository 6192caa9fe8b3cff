// Frame clock: how long the last frame took (dt) and how long we've been running.

use std::time::{Duration, Instant};

pub struct FrameClock {
    last: Instant,
    total: f64, // seconds, sum of every sample handed out
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last: start, total: 0.0 }
    }

    /// Time since the previous call (or since creation on the first call).
    /// No upper bound: if the host stalls, dt just grows.
    pub fn elapsed(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Sample the clock at `now`. A `now` behind the last sample counts as zero.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);
        self.total += dt.as_secs_f64();
        dt
    }

    /// Accumulated seconds since start; never reset.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
