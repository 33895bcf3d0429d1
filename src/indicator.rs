//! The dots widget and the host-facing capability traits.

use glam::Vec2;
use web_time::Instant;

use crate::animation::AnimationDriver;
use crate::error::DotsError;
use crate::layout::{measure, Size};
use crate::options::{Color, Density, Options};
use crate::render::{draw_commands, DrawCommand};
use crate::selection::{IndicatorState, SavedState, Selection};
use crate::style::StyleConfig;

/// Low-level drawing surface provided by the host.
pub trait Canvas {
    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// View capabilities the host invokes on its own schedule.
pub trait IndicatorView {
    /// Size the widget needs.
    fn measure(&self) -> Size;

    /// Draw commands for the current frame.
    fn draw(&self) -> Vec<DrawCommand>;

    /// Replace the style after the host parsed its attributes.
    fn on_attributes_parsed(&mut self, style: StyleConfig);
}

/// Pager events forwarded to an indicator.
pub trait PagerIndicator {
    /// Set the number of pages.
    fn set_dot_count(&mut self, count: usize);

    /// Select a page. A repeat of the current page does nothing; a negative
    /// page clears the selection.
    fn set_current_position(&mut self, position: i32);

    /// Scroll progress from the pager. `offset` is the fraction of the way
    /// to the next page in `[0, 1)`.
    fn on_page_scrolled(&mut self, page: i32, offset: f32);
}

/// Row of page dots with an animated selection.
///
/// Owns its [`IndicatorState`] exclusively. Redraw and relayout requests
/// are flags the host consumes with [`take_redraw_request`] and
/// [`take_layout_request`].
///
/// [`take_redraw_request`]: Self::take_redraw_request
/// [`take_layout_request`]: Self::take_layout_request
#[derive(Debug)]
pub struct DotsIndicator {
    style: StyleConfig,
    state: IndicatorState,
    driver: AnimationDriver,
    redraw_requested: bool,
    layout_requested: bool,
}

impl Default for DotsIndicator {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl DotsIndicator {
    /// Create an indicator with no dots and nothing selected.
    #[must_use]
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            state: IndicatorState::new(),
            driver: AnimationDriver::new(),
            redraw_requested: false,
            layout_requested: false,
        }
    }

    /// Create an indicator from options resolved at `density`.
    pub fn from_options(
        options: &Options,
        density: Density,
    ) -> Result<Self, DotsError> {
        Ok(Self::new(options.resolve(density)?))
    }

    /// Active style.
    #[must_use]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Live state.
    #[must_use]
    pub fn state(&self) -> &IndicatorState {
        &self.state
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    /// Toggle interpolation for future transitions.
    pub fn set_dots_animated(&mut self, enabled: bool) -> &mut Self {
        self.style = self.style.with_animated(enabled);
        self
    }

    /// Select `position` with an explicit frame clock.
    pub fn set_current_position_at(&mut self, position: i32, now: Instant) {
        let Some(change) = self.state.select_index(position) else {
            return;
        };
        if self.style.animated {
            self.driver
                .start_transition(change, &mut self.state, &self.style, now);
        }
        self.redraw_requested = true;
    }

    /// Forward a scroll event with an explicit frame clock. Only the page is
    /// used; the offset does not produce partial progress.
    pub fn on_page_scrolled_at(&mut self, page: i32, offset: f32, now: Instant) {
        log::trace!("page scrolled: {page} + {offset}");
        self.set_current_position_at(page, now);
    }

    /// Apply every pending animation tick for this frame.
    ///
    /// Returns `true` while interpolations are still running and the host
    /// should schedule another frame.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let outcome = self.driver.tick(&mut self.state, now);
        self.redraw_requested |= outcome.redraw;
        outcome.running
    }

    /// Whether interpolations are in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Consume the pending relayout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    /// Replay this frame's draw commands onto `canvas`.
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for cmd in self.draw() {
            canvas.fill_circle(cmd.center, cmd.radius, cmd.color);
        }
    }

    /// Persisted snapshot of count and selection.
    #[must_use]
    pub fn saved_state(&self) -> SavedState {
        self.state.snapshot()
    }

    /// Serialize the persisted snapshot to an opaque blob.
    pub fn save(&self) -> Result<Vec<u8>, DotsError> {
        self.saved_state().encode()
    }

    /// Restore from a host blob. A missing or malformed blob restores the
    /// freshly-constructed defaults.
    pub fn restore(&mut self, blob: &[u8]) {
        self.restore_state(SavedState::decode_or_default(blob));
    }

    /// Restore from a decoded snapshot and request relayout and redraw.
    /// In-flight interpolations are dropped.
    pub fn restore_state(&mut self, saved: SavedState) {
        self.driver.clear();
        self.state = IndicatorState::from_snapshot(saved);
        log::debug!(
            "restored indicator: {} dots, selection {:?}",
            self.state.dot_count,
            self.state.selection()
        );
        self.layout_requested = true;
        self.redraw_requested = true;
    }
}

impl IndicatorView for DotsIndicator {
    fn measure(&self) -> Size {
        measure(self.state.dot_count, &self.style)
    }

    fn draw(&self) -> Vec<DrawCommand> {
        draw_commands(&self.state, &self.style)
    }

    fn on_attributes_parsed(&mut self, style: StyleConfig) {
        if let Err(e) = style.validate() {
            log::warn!("ignoring dot style: {e}");
            return;
        }
        self.style = style;
        self.layout_requested = true;
        self.redraw_requested = true;
    }
}

impl PagerIndicator for DotsIndicator {
    fn set_dot_count(&mut self, count: usize) {
        if self.state.set_dot_count(count) {
            log::debug!("dot count -> {count}");
        }
        self.layout_requested = true;
    }

    fn set_current_position(&mut self, position: i32) {
        self.set_current_position_at(position, Instant::now());
    }

    fn on_page_scrolled(&mut self, page: i32, offset: f32) {
        self.on_page_scrolled_at(page, offset, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[derive(Default)]
    struct RecordingCanvas {
        circles: Vec<(Vec2, f32, Color)>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }
    }

    fn animated() -> DotsIndicator {
        let mut indicator = DotsIndicator::new(StyleConfig {
            normal_radius: 2.0,
            selected_radius: 4.0,
            animation_duration: Duration::from_millis(100),
            ..StyleConfig::default()
        });
        let _ = indicator.set_dots_animated(true);
        indicator.set_dot_count(4);
        indicator
    }

    #[test]
    fn set_dot_count_requests_layout() {
        let mut indicator = DotsIndicator::default();
        indicator.set_dot_count(3);
        assert!(indicator.take_layout_request());
        assert!(!indicator.take_layout_request());
    }

    #[test]
    fn repeated_position_starts_one_animation() {
        let mut indicator = animated();
        let now = Instant::now();
        indicator.set_current_position_at(1, now);
        assert!(indicator.take_redraw_request());
        indicator.set_current_position_at(1, now);
        assert!(!indicator.take_redraw_request());
        assert!(indicator.is_animating());
    }

    #[test]
    fn static_change_redraws_without_animating() {
        let mut indicator = DotsIndicator::default();
        indicator.set_dot_count(3);
        indicator.set_current_position(2);
        assert!(indicator.needs_redraw());
        assert!(!indicator.is_animating());
        let cmds = indicator.draw();
        assert_eq!(cmds[2].radius, indicator.style().selected_radius);
    }

    #[test]
    fn frames_run_until_converged() {
        let mut indicator = animated();
        let start = Instant::now();
        indicator.set_current_position_at(0, start);
        indicator.set_current_position_at(2, start);
        assert!(indicator.on_frame(start + Duration::from_millis(50)));
        assert!(!indicator.on_frame(start + Duration::from_millis(100)));

        let cmds = indicator.draw();
        assert_eq!(cmds[2].radius, 4.0);
        assert_eq!(cmds[0].radius, 2.0);
        assert!(!indicator.on_frame(start + Duration::from_millis(120)));
    }

    #[test]
    fn page_scroll_ignores_offset() {
        let mut indicator = animated();
        indicator.on_page_scrolled_at(3, 0.75, Instant::now());
        assert_eq!(indicator.selection(), Selection::Selected(3));
    }

    #[test]
    fn invalid_attributes_are_ignored() {
        let mut indicator = DotsIndicator::default();
        indicator.on_attributes_parsed(StyleConfig {
            normal_radius: -1.0,
            ..StyleConfig::default()
        });
        assert_eq!(indicator.style(), &StyleConfig::default());
        assert!(!indicator.take_layout_request());
    }

    #[test]
    fn paint_replays_commands() {
        let mut indicator = DotsIndicator::default();
        indicator.set_dot_count(3);
        indicator.set_current_position(1);
        let mut canvas = RecordingCanvas::default();
        indicator.paint(&mut canvas);
        assert_eq!(canvas.circles.len(), 3);
        assert_eq!(canvas.circles[1].1, indicator.style().selected_radius);
    }

    #[test]
    fn restore_requests_layout_and_redraw() {
        let mut source = DotsIndicator::default();
        source.set_dot_count(5);
        source.set_current_position(2);
        let blob = source.save().unwrap();

        let mut restored = DotsIndicator::default();
        restored.restore(&blob);
        assert!(restored.take_layout_request());
        assert!(restored.take_redraw_request());
        assert_eq!(restored.state().dot_count, 5);
        assert_eq!(restored.selection(), Selection::Selected(2));
    }

    #[test]
    fn garbage_blob_restores_defaults() {
        let mut indicator = DotsIndicator::default();
        indicator.set_dot_count(4);
        indicator.restore(b"\x00\x01garbage");
        assert_eq!(indicator.state().dot_count, 0);
        assert_eq!(indicator.selection(), Selection::Unselected);
    }

    #[test]
    fn draw_before_first_tick_shows_start_radii() {
        let mut indicator = animated();
        let t0 = Instant::now();
        indicator.set_current_position_at(0, t0);
        assert!(!indicator.on_frame(t0 + Duration::from_millis(100)));

        let t1 = t0 + Duration::from_millis(200);
        indicator.set_current_position_at(1, t1);
        assert!(indicator.take_redraw_request());
        let radii: Vec<f32> = indicator.draw().iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![4.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn negative_position_clears_and_shrinks() {
        let mut indicator = animated();
        let t0 = Instant::now();
        indicator.set_current_position_at(2, t0);
        let _ = indicator.on_frame(t0 + Duration::from_millis(100));

        let t1 = t0 + Duration::from_millis(200);
        indicator.set_current_position_at(-1, t1);
        assert_eq!(indicator.selection(), Selection::Unselected);
        assert!(indicator.is_animating());
        assert_eq!(indicator.draw()[2].radius, 4.0);

        assert!(!indicator.on_frame(t1 + Duration::from_millis(100)));
        let cmds = indicator.draw();
        assert_eq!(cmds[2].radius, 2.0);
        assert!(cmds.iter().all(|c| c.color == indicator.style().normal_color));
    }

    #[test]
    fn restore_drops_running_animation() {
        let mut indicator = animated();
        let now = Instant::now();
        indicator.set_current_position_at(1, now);
        assert!(indicator.is_animating());

        indicator.restore_state(SavedState::new(3, Some(0)));
        assert!(!indicator.is_animating());
        assert!(!indicator.on_frame(now + Duration::from_millis(50)));
        assert_eq!(indicator.state().current_radius, 0.0);
    }

    #[test]
    fn oversized_blob_restores_defaults() {
        let mut indicator = DotsIndicator::default();
        indicator.restore(br#"{"current_index":0,"dot_count":9223372036854775807}"#);
        assert_eq!(indicator.state().dot_count, 0);
        assert!(indicator.draw().is_empty());
    }
}
