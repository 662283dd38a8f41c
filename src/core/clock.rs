use std::time::Instant;

/// Monotonic seconds since an arbitrary epoch.
/// All animations read the same source.
pub trait TimeSource {
    /// Seconds since the epoch; never decreases
    fn now(&self) -> f32;
}

/// Seconds from `marker` to `now` on the session clock, never negative
pub fn since(marker: f32, now: f32) -> f32 {
    (now - marker).max(0.0)
}

/// Wall clock backed by `Instant`
#[derive(Debug)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn now(&self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }
}

/// Hand-driven clock for tests and offline stepping
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now: f32,
}

impl ManualClock {
    pub fn new(start: f32) -> Self {
        Self { now: start }
    }

    /// Move forward by `delta` seconds; negative deltas are ignored
    pub fn advance(&mut self, delta: f32) {
        self.now += delta.max(0.0);
    }

    /// Jump to `time`, refusing to go backwards
    pub fn set(&mut self, time: f32) {
        self.now = self.now.max(time);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f32 {
        self.now
    }
}
