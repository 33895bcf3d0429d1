//! A single radius interpolation task.

use web_time::{Duration, Instant};

use super::easing::EasingFunction;

/// Which live radius an interpolation writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusSlot {
    /// The newly current dot, growing to the selected radius.
    Current,
    /// The dot that lost the selection, shrinking to the normal radius.
    Previous,
}

/// Interpolates one radius from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct RadiusInterpolation {
    /// Field this task writes each tick.
    pub slot: RadiusSlot,
    /// Radius at progress 0.
    pub from: f32,
    /// Radius at progress 1.
    pub to: f32,
    /// When the task started.
    pub start_time: Instant,
    /// Total duration of the task.
    pub duration: Duration,
    /// Easing applied to linear progress.
    pub easing: EasingFunction,
}

impl RadiusInterpolation {
    /// Create a new interpolation task.
    #[must_use]
    pub fn new(
        slot: RadiusSlot,
        from: f32,
        to: f32,
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            slot,
            from,
            to,
            start_time,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the task has reached its end value.
    #[inline]
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.duration
    }

    /// Radius at `now`. Exactly `to` once finished.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let t = self.easing.evaluate(self.progress(now));
        self.from + (self.to - self.from) * t
    }
}
