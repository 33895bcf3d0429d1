//! Widget sizing from dot count and style.

use crate::style::StyleConfig;

/// Measured widget size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Total width.
    pub width: f32,
    /// Total height.
    pub height: f32,
}

/// Size the indicator needs for `dot_count` dots.
///
/// Every dot is counted at the normal diameter plus its two spacing margins,
/// and the selected diameter is added once. The width therefore does not
/// depend on which dot is current, so selection changes never relayout.
/// Height is the selected diameter plus the top padding on both sides.
#[must_use]
pub fn measure(dot_count: usize, style: &StyleConfig) -> Size {
    let width = if dot_count == 0 {
        0.0
    } else {
        let n = dot_count as f32;
        (n - 1.0) * 2.0 * style.normal_radius
            + 2.0 * style.selected_radius
            + n * 2.0 * style.spacing
    };
    Size {
        width,
        height: 2.0 * style.selected_radius + 2.0 * style.vertical_padding,
    }
}
