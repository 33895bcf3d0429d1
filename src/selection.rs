//! Current/previous selection tracking and the persisted snapshot.

use serde::{Deserialize, Serialize};

use crate::error::DotsError;

/// Selection as the host sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No page has been selected yet.
    Unselected,
    /// The dot at this index is current. May lie outside `0..dot_count`.
    Selected(usize),
}

/// A selection change produced by [`IndicatorState::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Index that was current before the change, if any.
    pub from: Option<usize>,
    /// Newly current index, `None` when the selection was cleared.
    pub to: Option<usize>,
}

impl SelectionChange {
    /// Whether the dot losing the selection should shrink back.
    #[must_use]
    pub fn shrinks_previous(&self) -> bool {
        self.from.is_some()
    }
}

/// Mutable render state owned by one indicator.
///
/// `current_radius` and `previous_radius` are written by the animation
/// driver and only read while the style is animated.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    /// Number of dots (pages).
    pub dot_count: usize,
    /// Current dot, `None` until the first selection.
    pub current: Option<usize>,
    /// Dot that was current before the last transition.
    ///
    /// Starts at `Some(0)` rather than `None`, so dot 0 takes the
    /// "previous" role until the first transition.
    pub previous: Option<usize>,
    /// Live radius of the current dot.
    pub current_radius: f32,
    /// Live radius of the previous dot.
    pub previous_radius: f32,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorState {
    /// Fresh state: no dots, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dot_count: 0,
            current: None,
            previous: Some(0),
            current_radius: 0.0,
            previous_radius: 0.0,
        }
    }

    /// Rebuild state from a persisted snapshot.
    ///
    /// Only the count and current index are restored; everything else keeps
    /// its freshly-constructed value.
    #[must_use]
    pub fn from_snapshot(saved: SavedState) -> Self {
        Self {
            dot_count: saved.dot_count(),
            current: saved.current(),
            ..Self::new()
        }
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.current
            .map_or(Selection::Unselected, Selection::Selected)
    }

    /// Whether the current index names a drawn dot.
    #[must_use]
    pub fn has_visible_selection(&self) -> bool {
        self.current.is_some_and(|i| i < self.dot_count)
    }

    /// Set the dot count. Returns `true` when it changed.
    pub fn set_dot_count(&mut self, count: usize) -> bool {
        let changed = self.dot_count != count;
        self.dot_count = count;
        changed
    }

    /// Move the selection to `index`; `None` clears it.
    ///
    /// Returns `None` when `index` is already current; otherwise the old
    /// current index becomes the previous one.
    pub fn select(&mut self, index: Option<usize>) -> Option<SelectionChange> {
        if self.current == index {
            return None;
        }
        let from = self.current;
        self.previous = from;
        self.current = index;
        if let Some(i) = index.filter(|&i| i >= self.dot_count) {
            log::debug!(
                "selected dot {i} is outside 0..{}; nothing highlighted",
                self.dot_count
            );
        }
        Some(SelectionChange { from, to: index })
    }

    /// Move the selection to a host index; any negative value clears it.
    pub fn select_index(&mut self, index: i32) -> Option<SelectionChange> {
        self.select(usize::try_from(index).ok())
    }

    /// Snapshot of the persisted fields.
    #[must_use]
    pub fn snapshot(&self) -> SavedState {
        SavedState::new(self.dot_count, self.current)
    }
}

/// Minimal persisted state: dot count and current index (`-1` = none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Current dot index, `-1` when nothing is selected.
    pub current_index: i32,
    /// Number of dots.
    pub dot_count: i32,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            current_index: -1,
            dot_count: 0,
        }
    }
}

impl SavedState {
    /// Snapshot from live values.
    #[must_use]
    pub fn new(dot_count: usize, current: Option<usize>) -> Self {
        Self {
            current_index: current
                .map_or(-1, |i| i32::try_from(i).unwrap_or(i32::MAX)),
            dot_count: i32::try_from(dot_count).unwrap_or(i32::MAX),
        }
    }

    /// Dot count; negative values clamp to zero.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        usize::try_from(self.dot_count).unwrap_or(0)
    }

    /// Current index; any negative value means unselected.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        usize::try_from(self.current_index).ok()
    }

    /// Serialize to the opaque blob handed to the host.
    pub fn encode(&self) -> Result<Vec<u8>, DotsError> {
        serde_json::to_vec(self).map_err(|e| DotsError::SavedState(e.to_string()))
    }

    /// Strict decode of a host blob.
    pub fn decode(blob: &[u8]) -> Result<Self, DotsError> {
        serde_json::from_slice(blob)
            .map_err(|e| DotsError::SavedState(e.to_string()))
    }

    /// Decode a host blob, falling back to fresh defaults when it is
    /// missing or malformed.
    #[must_use]
    pub fn decode_or_default(blob: &[u8]) -> Self {
        Self::decode(blob).unwrap_or_else(|e| {
            log::warn!("discarding saved indicator state: {e}");
            Self::default()
        })
    }
}
