//! HSL palette for color classes.
//!
//! `k` classes get `k` hues evenly spaced around the color wheel at a
//! fixed saturation and lightness. Class `c` maps to hue
//! `(c - 1) * 360 / k`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ColorClass;

/// Saturation and lightness shared by every palette entry (percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            saturation: 80,
            lightness: 50,
        }
    }
}

/// A display color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderColor {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation (percent).
    pub saturation: u8,
    /// Lightness (percent).
    pub lightness: u8,
}

impl RenderColor {
    /// Creates a color.
    pub fn hsl(hue: f64, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// CSS notation, e.g. `hsl(120, 80%, 50%)`.
impl fmt::Display for RenderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Evenly spaced colors, one per color class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: Vec<RenderColor>,
}

impl Palette {
    /// Generates `count` evenly spaced hues.
    pub fn generate(count: u32, config: &PaletteConfig) -> Self {
        let colors = (0..count)
            .map(|i| {
                let hue = f64::from(i) * 360.0 / f64::from(count);
                RenderColor::hsl(hue, config.saturation, config.lightness)
            })
            .collect();
        Self { colors }
    }

    /// Color for a 1-based class, or `None` if the class is out of range.
    pub fn color_for(&self, class: ColorClass) -> Option<RenderColor> {
        let position = usize::try_from(class.checked_sub(1)?).ok()?;
        self.colors.get(position).copied()
    }

    /// Palette entries in class order.
    pub fn colors(&self) -> &[RenderColor] {
        &self.colors
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
