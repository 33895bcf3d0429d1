use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Color;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Dots", inline)]
#[serde(default)]
/// Dot geometry and colors. Lengths are in dp unless noted.
pub struct StyleOptions {
    /// Radius of an unselected dot.
    #[schemars(title = "Dot Radius", range(min = 0.5, max = 32.0))]
    pub dot_radius: f32,
    /// Radius of the selected dot.
    #[schemars(title = "Selected Radius", range(min = 0.5, max = 32.0))]
    pub dot_selected_radius: f32,
    /// Margin on each side of every dot.
    #[schemars(title = "Dot Spacing", range(min = 0.0, max = 32.0))]
    pub dot_spacing: f32,
    /// Fill color of unselected dots.
    #[schemars(title = "Dot Color", with = "String")]
    pub dot_color: Color,
    /// Fill color of the selected dot.
    #[schemars(title = "Selected Color", with = "String")]
    pub dot_selected_color: Color,
    /// Host top padding in pixels; applied above and below the dots.
    #[schemars(skip)]
    pub vertical_padding: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            dot_radius: 3.0,
            dot_selected_radius: 5.0,
            dot_spacing: 3.0,
            dot_color: Color::BLACK,
            dot_selected_color: Color::BLACK,
            vertical_padding: 0.0,
        }
    }
}
