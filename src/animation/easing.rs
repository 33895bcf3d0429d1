//! Easing curves for radius interpolation.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` monotonically, so an interpolated
//! radius never overshoots its endpoints.

use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::SqrtOut => t.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::SqrtOut,
    ];

    #[test]
    fn every_curve_pins_both_ends() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.evaluate(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.evaluate(-2.0), 0.0, "{easing:?}");
            assert_eq!(easing.evaluate(3.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn ease_out_curves_lead_linear_and_ease_in_lags() {
        let t = 0.3;
        let linear = EasingFunction::Linear.evaluate(t);
        assert!(EasingFunction::QuadraticOut.evaluate(t) > linear);
        assert!(EasingFunction::SqrtOut.evaluate(t) > linear);
        assert!(EasingFunction::QuadraticIn.evaluate(t) < linear);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = easing.evaluate(0.0);
            for step in 1..=100 {
                let v = easing.evaluate(step as f32 / 100.0);
                assert!(v >= last, "{easing:?} decreased at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(EasingFunction::default(), EasingFunction::Linear);
    }

    #[test]
    fn parses_from_snake_case() {
        let easing: EasingFunction =
            serde_json::from_str("\"sqrt_out\"").unwrap();
        assert_eq!(easing, EasingFunction::SqrtOut);
    }
}
