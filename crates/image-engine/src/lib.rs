//! Image processing for e-paper bitmap generation.
//!
//! Decodes PNG files into 16-bit RGBA pixel grids, optionally scales them to a
//! panel resolution, and packs them into 1bpp MSB-first bitmaps using a
//! luminance threshold.

pub mod load;
pub mod luma;
pub mod pack;
pub mod resize;

use std::path::PathBuf;

// Re-exports for convenience
pub use load::{Rgba16Image, decode_png, load_png};
pub use luma::{LuminanceModel, Threshold};
pub use pack::{PackedBitmap, pack_bitmap, packed_len};
pub use resize::{PanelSize, resize_to_panel};

/// Errors that can occur while loading or preparing an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageEngineError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid panel size {0:?}: expected WIDTHxHEIGHT with both sides at least 1")]
    InvalidPanelSize(String),

    #[error("Unknown luminance model {0:?}: expected 'grayscale' or 'perceptual'")]
    UnknownLuminanceModel(String),
}

/// Result type alias for image-engine operations.
pub type Result<T> = std::result::Result<T, ImageEngineError>;
