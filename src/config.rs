use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{parse_color, FlagPalette};
use crate::embed::EmbedConfig;
use crate::error::{KernelError, Result};
use crate::scene::PlotStyle;

/// File name used when no kernel path is given on the command line.
pub const DEFAULT_KERNEL_PATH: &str = "kernel";

// ---------------------------------------------------------------------------
// Settings file
// ---------------------------------------------------------------------------

/// Everything tunable about a run. Every field is optional in the JSON file:
///
/// ```json
/// {
///   "embed": { "perplexity": 8.0, "seed": 7 },
///   "style": { "nsfw_color": "crimson", "label_offset": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub embed: EmbedConfig,
    pub style: StyleConfig,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| KernelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| KernelError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded settings from {}: {settings:?}", path.display());
        Ok(settings)
    }
}

/// Serializable form of [`PlotStyle`]; colors are names or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub nsfw_color: String,
    pub safe_color: String,
    pub label_offset: f64,
    pub font_size: f32,
    pub marker_radius: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = PlotStyle::default();
        Self {
            nsfw_color: "red".into(),
            safe_color: "blue".into(),
            label_offset: style.label_offset,
            font_size: style.font_size,
            marker_radius: style.marker_radius,
        }
    }
}

impl StyleConfig {
    pub fn to_plot_style(&self) -> Result<PlotStyle> {
        if !self.label_offset.is_finite() {
            return Err(KernelError::Config(format!(
                "label_offset must be finite, got {}",
                self.label_offset
            )));
        }
        if !(self.font_size > 0.0 && self.marker_radius > 0.0) {
            return Err(KernelError::Config(
                "font_size and marker_radius must be positive".into(),
            ));
        }
        Ok(PlotStyle {
            palette: FlagPalette {
                nsfw: parse_color(&self.nsfw_color)?,
                safe: parse_color(&self.safe_color)?,
            },
            label_offset: self.label_offset,
            font_size: self.font_size,
            marker_radius: self.marker_radius,
        })
    }
}
