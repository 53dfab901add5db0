//! Luminance models and the ink/background threshold.
//!
//! All luminance values live on the 16-bit scale (0..=65535) so that both
//! models can share one cutoff.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::ImageEngineError;

/// Midpoint of the 16-bit channel range.
pub const MIDPOINT: u16 = 0x8000;

/// How a pixel's red/green/blue channels are reduced to a single brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuminanceModel {
    /// Standard 8-bit gray conversion (coefficients 19595/38470/7471 over 2^16),
    /// re-expanded to 16 bits.
    #[default]
    Grayscale,
    /// Weighted sum 0.299 R + 0.587 G + 0.114 B at full 16-bit precision.
    Perceptual,
}

impl LuminanceModel {
    /// Brightness of a pixel on the 0..=65535 scale. Alpha is ignored; decoded
    /// pixels are already premultiplied.
    pub fn luminance(self, px: Rgba<u16>) -> u16 {
        let [r, g, b, _] = px.0.map(u64::from);
        match self {
            Self::Grayscale => {
                let y = (19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24;
                (y * 257) as u16
            }
            Self::Perceptual => ((299 * r + 587 * g + 114 * b) / 1000) as u16,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Perceptual => "perceptual",
        }
    }
}

impl fmt::Display for LuminanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LuminanceModel {
    type Err = ImageEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "gray" => Ok(Self::Grayscale),
            "perceptual" => Ok(Self::Perceptual),
            _ => Err(ImageEngineError::UnknownLuminanceModel(s.to_string())),
        }
    }
}

/// Ink/background decision policy.
///
/// A pixel is ink (bit 1) when its luminance is strictly below `cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub model: LuminanceModel,
    pub cutoff: u16,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            model: LuminanceModel::default(),
            cutoff: MIDPOINT,
        }
    }
}

impl Threshold {
    pub fn new(model: LuminanceModel, cutoff: u16) -> Self {
        Self { model, cutoff }
    }

    /// Whether the pixel counts as ink.
    pub fn is_ink(&self, px: Rgba<u16>) -> bool {
        self.model.luminance(px) < self.cutoff
    }
}
