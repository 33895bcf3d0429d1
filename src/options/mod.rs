//! Indicator configuration with TOML preset support.
//!
//! Style and animation settings are expressed in density-independent units
//! and serialize to/from TOML. [`Options::resolve`] turns them into the
//! pixel-space [`StyleConfig`] the widget consumes.

mod animation;
mod color;
mod density;
mod style;

use std::path::Path;

pub use animation::AnimationOptions;
pub use color::Color;
pub use density::{Density, BASELINE_DPI};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::StyleOptions;
use web_time::Duration;

use crate::error::DotsError;
use crate::style::StyleConfig;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Dot geometry and colors.
    pub style: StyleOptions,
    /// Selection transition parameters.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, DotsError> {
        toml::from_str(content)
            .map_err(|e| DotsError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DotsError> {
        let content = std::fs::read_to_string(path).map_err(DotsError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DotsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DotsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DotsError::Io)?;
        }
        std::fs::write(path, content).map_err(DotsError::Io)
    }

    /// Resolve dp lengths against `density` into a validated pixel-space
    /// style.
    pub fn resolve(&self, density: Density) -> Result<StyleConfig, DotsError> {
        let style = &self.style;
        let animation = &self.animation;
        let config = StyleConfig {
            normal_radius: density.dp_to_px(style.dot_radius),
            selected_radius: density.dp_to_px(style.dot_selected_radius),
            spacing: density.dp_to_px(style.dot_spacing),
            vertical_padding: style.vertical_padding,
            normal_color: style.dot_color,
            selected_color: style.dot_selected_color,
            animation_duration: Duration::from_millis(animation.duration_ms),
            animated: animation.animated,
            easing: animation.easing,
            restart: animation.restart,
        };
        config.validate()?;
        log::debug!(
            "resolved dot style at {} dpi: radius {} / {}, spacing {}",
            density.dpi,
            config.normal_radius,
            config.selected_radius,
            config.spacing
        );
        Ok(config)
    }
}
