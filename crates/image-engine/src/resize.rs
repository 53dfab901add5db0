//! Panel-size scaling before packing.
//!
//! Scales to an exact panel resolution with bilinear filtering. The image is
//! stretched to fill; aspect ratio is not preserved.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use tracing::debug;

use crate::ImageEngineError;
use crate::load::Rgba16Image;

/// Target resolution of an e-paper panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    width: u32,
    height: u32,
}

impl PanelSize {
    /// Pimoroni Badger 2040 W.
    pub const BADGER_2040W: Self = Self {
        width: 296,
        height: 128,
    };

    /// Both sides must be at least 1 pixel.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

impl fmt::Display for PanelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for PanelSize {
    type Err = ImageEngineError;

    /// Accepts `WIDTHxHEIGHT` (case-insensitive `x`) or the preset `badger2040w`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ImageEngineError::InvalidPanelSize(s.to_string());
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("badger2040w") {
            return Ok(Self::BADGER_2040W);
        }

        let (w, h) = trimmed.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.parse().map_err(|_| invalid())?;
        let height = h.parse().map_err(|_| invalid())?;
        Self::new(width, height).ok_or_else(invalid)
    }
}

/// Scale an image to the panel resolution.
///
/// Returns a copy of the original unchanged if it already matches.
pub fn resize_to_panel(img: &Rgba16Image, size: PanelSize) -> Rgba16Image {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == (size.width, size.height) {
        debug!(%size, "Image already at panel size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = size.width,
        new_height = size.height,
        "Resizing image to panel size"
    );

    imageops::resize(img, size.width, size.height, FilterType::Triangle)
}
