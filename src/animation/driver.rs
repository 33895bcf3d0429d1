//! Drives the grow/shrink interpolations started by selection changes.
//!
//! The driver is ticked by the host's frame callback. Each tick writes the
//! interpolated radii into the [`IndicatorState`] and reports whether a
//! redraw is needed; finished tasks are dropped.

use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::interpolation::{RadiusInterpolation, RadiusSlot};
use crate::selection::{IndicatorState, SelectionChange};
use crate::style::StyleConfig;

/// What happens to in-flight interpolations when a new transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Earlier tasks keep running and keep writing their radius slot until
    /// they finish. Rapid selection changes can show mixed radii.
    #[default]
    Overlap,
    /// Drop every in-flight task before starting the new ones.
    Cancel,
}

/// Result of one driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// At least one radius was written this tick.
    pub redraw: bool,
    /// Tasks remain and want another tick.
    pub running: bool,
}

/// Runs radius interpolations against an [`IndicatorState`].
#[derive(Debug)]
pub struct AnimationDriver {
    /// Tasks in start order; later tasks write last within a tick.
    tasks: Vec<RadiusInterpolation>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    /// Create an idle driver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(4),
        }
    }

    /// Drop every in-flight task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Start the interpolations for one selection change.
    ///
    /// The new current dot grows from the normal to the selected radius and
    /// the previous dot, if any, shrinks back. Start values are written to
    /// `state` immediately so a draw before the first tick is consistent.
    pub fn start_transition(
        &mut self,
        change: SelectionChange,
        state: &mut IndicatorState,
        style: &StyleConfig,
        now: Instant,
    ) {
        if style.restart == RestartPolicy::Cancel && !self.tasks.is_empty() {
            log::debug!(
                "cancelling {} in-flight dot animation(s)",
                self.tasks.len()
            );
            self.tasks.clear();
        }

        if change.to.is_some() {
            state.current_radius = style.normal_radius;
            self.tasks.push(RadiusInterpolation::new(
                RadiusSlot::Current,
                style.normal_radius,
                style.selected_radius,
                now,
                style.animation_duration,
                style.easing,
            ));
        }
        if change.shrinks_previous() {
            state.previous_radius = style.selected_radius;
            self.tasks.push(RadiusInterpolation::new(
                RadiusSlot::Previous,
                style.selected_radius,
                style.normal_radius,
                now,
                style.animation_duration,
                style.easing,
            ));
        }
        log::debug!(
            "dot transition {:?} -> {:?} ({} task(s) running)",
            change.from,
            change.to,
            self.tasks.len()
        );
    }

    /// Apply every pending task at `now`.
    pub fn tick(&mut self, state: &mut IndicatorState, now: Instant) -> TickOutcome {
        if self.tasks.is_empty() {
            return TickOutcome::default();
        }

        for task in &self.tasks {
            let value = task.value(now);
            match task.slot {
                RadiusSlot::Current => state.current_radius = value,
                RadiusSlot::Previous => state.previous_radius = value,
            }
        }
        log::trace!(
            "dot radii current={} previous={}",
            state.current_radius,
            state.previous_radius
        );

        self.tasks.retain(|task| !task.is_finished(now));
        TickOutcome {
            redraw: true,
            running: !self.tasks.is_empty(),
        }
    }

    /// Whether any task still wants ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Number of in-flight tasks.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.tasks.len()
    }
}
