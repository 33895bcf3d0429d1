use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{EasingFunction, RestartPolicy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Selection transition parameters.
pub struct AnimationOptions {
    /// Interpolate radii on selection change instead of snapping.
    #[schemars(title = "Animate Dots")]
    pub animated: bool,
    /// Length of one grow/shrink interpolation.
    #[schemars(title = "Duration (ms)", range(min = 1, max = 5000))]
    pub duration_ms: u64,
    /// Curve applied to interpolation progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// What happens to in-flight interpolations when a new transition
    /// starts.
    #[schemars(skip)]
    pub restart: RestartPolicy,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            animated: false,
            duration_ms: 250,
            easing: EasingFunction::Linear,
            restart: RestartPolicy::Overlap,
        }
    }
}
