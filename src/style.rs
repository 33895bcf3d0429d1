//! Resolved pixel-space style for one indicator.

use web_time::Duration;

use crate::animation::{EasingFunction, RestartPolicy};
use crate::error::DotsError;
use crate::options::Color;

/// Default length of a grow/shrink interpolation.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Style parameters in pixels, created once from host configuration.
///
/// Built by [`Options::resolve`](crate::options::Options::resolve) or by
/// hand; [`StyleConfig::validate`] checks the ranges the layout and
/// animation code rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// Radius of an unselected dot.
    pub normal_radius: f32,
    /// Radius of the selected dot.
    pub selected_radius: f32,
    /// Margin on each side of every dot.
    pub spacing: f32,
    /// Host top padding, mirrored below the dots.
    pub vertical_padding: f32,
    /// Fill color of unselected dots.
    pub normal_color: Color,
    /// Fill color of the selected dot.
    pub selected_color: Color,
    /// Length of one grow/shrink interpolation.
    pub animation_duration: Duration,
    /// Interpolate radii on selection change instead of snapping.
    pub animated: bool,
    /// Curve applied to interpolation progress.
    pub easing: EasingFunction,
    /// Handling of in-flight interpolations when a new transition starts.
    pub restart: RestartPolicy,
}

impl Default for StyleConfig {
    /// Defaults at baseline density: 3px dots, 5px selected, 3px spacing.
    fn default() -> Self {
        Self {
            normal_radius: 3.0,
            selected_radius: 5.0,
            spacing: 3.0,
            vertical_padding: 0.0,
            normal_color: Color::BLACK,
            selected_color: Color::BLACK,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            animated: false,
            easing: EasingFunction::Linear,
            restart: RestartPolicy::Overlap,
        }
    }
}

impl StyleConfig {
    /// Check that radii and duration are positive and spacing and padding
    /// are non-negative.
    pub fn validate(&self) -> Result<(), DotsError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(DotsError::InvalidOption(format!(
                    "{name} must be > 0, got {v}"
                )))
            }
        };
        let non_negative = |name: &str, v: f32| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(DotsError::InvalidOption(format!(
                    "{name} must be >= 0, got {v}"
                )))
            }
        };
        positive("dot radius", self.normal_radius)?;
        positive("selected dot radius", self.selected_radius)?;
        non_negative("dot spacing", self.spacing)?;
        non_negative("vertical padding", self.vertical_padding)?;
        if self.animation_duration.is_zero() {
            return Err(DotsError::InvalidOption(
                "animation duration must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Copy with animation switched on or off.
    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Copy with a different host top padding.
    #[must_use]
    pub fn with_vertical_padding(mut self, padding: f32) -> Self {
        self.vertical_padding = padding;
        self
    }

    /// Vertical center shared by every dot.
    #[must_use]
    pub fn baseline(&self) -> f32 {
        self.selected_radius + self.vertical_padding
    }
}
