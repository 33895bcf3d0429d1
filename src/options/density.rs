use serde::{Deserialize, Serialize};

/// Dots per inch that maps one dp to exactly one pixel.
pub const BASELINE_DPI: f32 = 160.0;

/// Host pixel density used to resolve dp lengths into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density {
    /// Horizontal dots per inch reported by the display.
    pub dpi: f32,
}

impl Density {
    /// One dp per pixel.
    pub const BASELINE: Self = Self { dpi: BASELINE_DPI };

    /// Density from a display dpi.
    #[must_use]
    pub const fn new(dpi: f32) -> Self {
        Self { dpi }
    }

    /// Density from a scale factor (1.0 = baseline).
    #[must_use]
    pub fn from_scale(scale: f32) -> Self {
        Self {
            dpi: scale * BASELINE_DPI,
        }
    }

    /// Convert a dp length to whole pixels.
    #[must_use]
    pub fn dp_to_px(self, dp: f32) -> f32 {
        (dp * (self.dpi / BASELINE_DPI)).round()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}
