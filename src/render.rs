//! Per-frame draw pass: indicator state to circle commands.

use glam::Vec2;
use serde::Serialize;

use crate::options::Color;
use crate::selection::IndicatorState;
use crate::style::StyleConfig;

/// Upper bound on the up-front command buffer; larger rows grow on demand.
const MAX_PREALLOCATED_DOTS: usize = 64;

/// "Fill a circle at `center` with `radius` and `color`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    /// Circle center in widget pixels.
    pub center: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
}

/// Role a dot plays in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotRole {
    Current,
    Previous,
    Normal,
}

impl DotRole {
    fn of(index: usize, state: &IndicatorState) -> Self {
        if state.current == Some(index) {
            Self::Current
        } else if state.previous == Some(index) {
            Self::Previous
        } else {
            Self::Normal
        }
    }
}

/// Ordered draw commands for one frame, one per dot, left to right.
#[must_use]
pub fn draw_commands(state: &IndicatorState, style: &StyleConfig) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(state.dot_count.min(MAX_PREALLOCATED_DOTS));
    render_into(state, style, &mut out);
    out
}

/// Append one frame's draw commands to `out`.
///
/// Each dot occupies its role's static diameter plus `spacing` on both
/// sides; while animated, the drawn radius of the current and previous dots
/// is the live interpolated one. All dots share the selected-radius
/// centerline.
pub fn render_into(
    state: &IndicatorState,
    style: &StyleConfig,
    out: &mut Vec<DrawCommand>,
) {
    let y = style.baseline();
    let mut cursor = 0.0;

    for index in 0..state.dot_count {
        cursor += style.spacing;

        let (slot_radius, radius, color) = match DotRole::of(index, state) {
            DotRole::Current => (
                style.selected_radius,
                if style.animated {
                    state.current_radius
                } else {
                    style.selected_radius
                },
                style.selected_color,
            ),
            DotRole::Previous => (
                style.normal_radius,
                if style.animated {
                    state.previous_radius
                } else {
                    style.normal_radius
                },
                style.normal_color,
            ),
            DotRole::Normal => {
                (style.normal_radius, style.normal_radius, style.normal_color)
            }
        };

        out.push(DrawCommand {
            center: Vec2::new(cursor + slot_radius, y),
            radius,
            color,
        });

        cursor += 2.0 * slot_radius;
        cursor += style.spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure;

    fn style() -> StyleConfig {
        StyleConfig {
            normal_radius: 2.0,
            selected_radius: 4.0,
            spacing: 4.0,
            normal_color: Color::CYAN,
            selected_color: Color::RED,
            ..StyleConfig::default()
        }
    }

    fn state(dot_count: usize, current: Option<usize>) -> IndicatorState {
        IndicatorState {
            dot_count,
            current,
            ..IndicatorState::new()
        }
    }

    #[test]
    fn empty_state_draws_nothing() {
        assert!(draw_commands(&IndicatorState::new(), &style()).is_empty());
    }

    #[test]
    fn static_layout_left_to_right() {
        let cmds = draw_commands(&state(3, Some(1)), &style());
        let xs: Vec<f32> = cmds.iter().map(|c| c.center.x).collect();
        // Each slot is spacing + diameter + spacing: 4+4+4, 4+8+4, 4+4+4.
        assert_eq!(xs, vec![6.0, 20.0, 34.0]);
        assert!(cmds.iter().all(|c| c.center.y == 4.0));
        assert_eq!(cmds[1].radius, 4.0);
        assert_eq!(cmds[1].color, Color::RED);
        assert_eq!(cmds[0].color, Color::CYAN);
        assert_eq!(cmds[2].radius, 2.0);
    }

    #[test]
    fn dots_fit_measured_width() {
        let s = style();
        let st = state(3, Some(1));
        let last = *draw_commands(&st, &s).last().unwrap();
        let right_edge = last.center.x + last.radius + s.spacing;
        assert_eq!(right_edge, measure(3, &s).width);
    }

    #[test]
    fn out_of_range_selection_highlights_nothing() {
        let cmds = draw_commands(&state(3, Some(9)), &style());
        assert_eq!(cmds.len(), 3);
        assert!(cmds
            .iter()
            .all(|c| c.color == Color::CYAN && c.radius == 2.0));
    }

    #[test]
    fn animated_roles_use_live_radii() {
        let s = style().with_animated(true);
        let st = IndicatorState {
            dot_count: 3,
            current: Some(2),
            previous: Some(0),
            current_radius: 3.0,
            previous_radius: 2.5,
        };
        let cmds = draw_commands(&st, &s);
        assert_eq!(cmds[0].radius, 2.5);
        assert_eq!(cmds[0].color, Color::CYAN);
        assert_eq!(cmds[1].radius, 2.0);
        assert_eq!(cmds[2].radius, 3.0);
        assert_eq!(cmds[2].color, Color::RED);
        // Position follows the role's static radius, not the live one.
        assert_eq!(cmds[2].center.x, 32.0);
    }

    #[test]
    fn static_mode_ignores_live_radii() {
        let st = IndicatorState {
            dot_count: 2,
            current: Some(1),
            previous: Some(0),
            current_radius: 0.5,
            previous_radius: 0.5,
        };
        let cmds = draw_commands(&st, &style());
        assert_eq!(cmds[0].radius, 2.0);
        assert_eq!(cmds[1].radius, 4.0);
    }

    #[test]
    fn vertical_padding_moves_centerline() {
        let s = style().with_vertical_padding(3.0);
        let cmds = draw_commands(&state(2, None), &s);
        assert!(cmds.iter().all(|c| c.center.y == 7.0));
    }
}
