//! Single-attribute tween tracks.

use crate::ease::{Ease, Interpolate};
use crate::error::TweenError;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Validated duration/delay/curve triple for a tween request.
///
/// Only the constructors and [`Deserialize`] build one, and both reject
/// non-positive durations and negative delays.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Timing {
    duration: f64,
    delay: f64,
    ease: Ease,
}

#[derive(Deserialize)]
struct RawTiming {
    duration: f64,
    #[serde(default)]
    delay: f64,
    #[serde(default)]
    ease: Ease,
}

impl<'de> Deserialize<'de> for Timing {
    fn deserialize<D>(deserializer: D) -> Result<Timing, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTiming::deserialize(deserializer)?;
        Timing::new(raw.duration, raw.ease)
            .and_then(|timing| timing.with_delay(raw.delay))
            .map_err(de::Error::custom)
    }
}

impl Timing {
    /// Reject zero, negative and non-finite durations.
    pub fn new(duration: f64, ease: Ease) -> Result<Self, TweenError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(TweenError::NonPositiveDuration { duration });
        }
        Ok(Self {
            duration,
            delay: 0.0,
            ease,
        })
    }

    /// Hold the attribute for `delay` time units before the curve starts.
    pub fn with_delay(mut self, delay: f64) -> Result<Self, TweenError> {
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(TweenError::InvalidDelay { delay });
        }
        self.delay = delay;
        Ok(self)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }
}

/// One attribute's interpolation from `beginning` to `beginning + delta`.
///
/// `elapsed` starts at `-delay`; the track stays dormant while it is negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Easing<T> {
    pub active: bool,
    pub beginning: T,
    pub delta: T,
    pub elapsed: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl<T: Default> Default for Easing<T> {
    fn default() -> Self {
        Self {
            active: false,
            beginning: T::default(),
            delta: T::default(),
            elapsed: 0.0,
            duration: 1.0,
            ease: Ease::default(),
        }
    }
}

impl<T: Interpolate> Easing<T> {
    pub fn start(beginning: T, target: T, timing: Timing) -> Self {
        Self {
            active: true,
            beginning,
            delta: target - beginning,
            elapsed: -timing.delay,
            duration: timing.duration,
            ease: timing.ease,
        }
    }

    /// Replace this track outright with a fresh interpolation.
    pub fn restart(&mut self, beginning: T, target: T, timing: Timing) {
        *self = Self::start(beginning, target, timing);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> T {
        self.beginning + self.delta
    }

    /// Advance by `dt` and return the value to write, if any.
    ///
    /// Returns `None` while inactive or still inside the delay. On the step
    /// that reaches the duration the exact target is returned and the track
    /// deactivates.
    pub fn advance(&mut self, dt: f64) -> Option<T> {
        if !self.active {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < 0.0 {
            None
        } else if self.elapsed < self.duration {
            Some(
                self.ease
                    .apply(self.elapsed, self.beginning, self.delta, self.duration),
            )
        } else {
            self.active = false;
            log::debug!(
                "{} track settled after {:.3} (duration {:.3})",
                self.ease,
                self.elapsed,
                self.duration
            );
            Some(self.target())
        }
    }
}
