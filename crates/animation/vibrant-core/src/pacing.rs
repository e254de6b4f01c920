//! Host-side frame pacing.

use std::time::{Duration, Instant};

/// Drops ticks that arrive sooner than `min_interval` after the last accepted
/// one. The first call only primes the clock.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Seconds since the last accepted tick, or `None` when this tick should
    /// be skipped.
    pub fn tick(&mut self) -> Option<f64> {
        self.tick_at(Instant::now())
    }

    /// [`FramePacer::tick`] with an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) -> Option<f64> {
        let Some(last) = self.last else {
            self.last = Some(now);
            return None;
        };
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.min_interval {
            return None;
        }
        self.last = Some(now);
        Some(elapsed.as_secs_f64())
    }

    /// Forget the last tick; the next call primes the clock again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
