use eframe::egui::Color32;
use palette::Srgb;

use crate::error::{KernelError, Result};

// ---------------------------------------------------------------------------
// Color names → Color32
// ---------------------------------------------------------------------------

/// Resolve a CSS/SVG color name ("red", "steelblue") or a `#rrggbb` hex code.
pub fn parse_color(spec: &str) -> Result<Color32> {
    let spec = spec.trim();
    let rgb: Srgb<u8> = if spec.starts_with('#') {
        spec.parse::<Srgb<u8>>()
            .map_err(|e| KernelError::Config(format!("bad hex color '{spec}': {e}")))?
    } else {
        palette::named::from_str(&spec.to_ascii_lowercase())
            .ok_or_else(|| KernelError::Config(format!("unknown color name '{spec}'")))?
    };
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

// ---------------------------------------------------------------------------
// Flag palette: NSFW flag → Color32
// ---------------------------------------------------------------------------

/// The two categorical colors of the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagPalette {
    pub nsfw: Color32,
    pub safe: Color32,
}

impl Default for FlagPalette {
    fn default() -> Self {
        let from_named = |c: Srgb<u8>| Color32::from_rgb(c.red, c.green, c.blue);
        Self {
            nsfw: from_named(palette::named::RED),
            safe: from_named(palette::named::BLUE),
        }
    }
}

impl FlagPalette {
    pub fn color_for(&self, nsfw: bool) -> Color32 {
        if nsfw {
            self.nsfw
        } else {
            self.safe
        }
    }

    /// Legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> [(&'static str, Color32); 2] {
        [(NSFW_LABEL, self.nsfw), (SAFE_LABEL, self.safe)]
    }
}

pub const NSFW_LABEL: &str = "NSFW";
pub const SAFE_LABEL: &str = "SFW";
