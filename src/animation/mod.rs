//! Radius animation for selection transitions.
//!
//! A transition starts up to two [`RadiusInterpolation`] tasks: the new
//! current dot grows and the previous dot shrinks. The [`AnimationDriver`]
//! advances them from the host's frame callback.

mod driver;
mod easing;
mod interpolation;

pub use driver::{AnimationDriver, RestartPolicy, TickOutcome};
pub use easing::EasingFunction;
pub use interpolation::{RadiusInterpolation, RadiusSlot};
