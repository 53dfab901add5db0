//! PNG decoding into a 16-bit RGBA pixel grid.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::{ImageBuffer, ImageFormat, ImageReader, Rgba};
use tracing::debug;

use crate::{ImageEngineError, Result};

/// Pixel grid with 16 bits per channel, alpha premultiplied.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Open and decode a PNG file.
///
/// The file handle is released before this function returns, on success and on
/// error alike.
pub fn load_png(path: &Path) -> Result<Rgba16Image> {
    debug!(path = %path.display(), "Opening image");
    let file = File::open(path).map_err(|source| ImageEngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(BufReader::new(file))
}

/// Decode the first frame of a PNG stream.
pub fn decode_png<R: BufRead + Seek>(reader: R) -> Result<Rgba16Image> {
    let decoded = ImageReader::with_format(reader, ImageFormat::Png).decode()?;
    debug!(
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded PNG"
    );

    let mut img = decoded.into_rgba16();
    premultiply_alpha(&mut img);
    Ok(img)
}

/// Scale colour channels by alpha so transparent pixels read as black.
fn premultiply_alpha(img: &mut Rgba16Image) {
    for px in img.pixels_mut() {
        let a = u32::from(px[3]);
        if a == u32::from(u16::MAX) {
            continue;
        }
        for c in 0..3 {
            px[c] = (u32::from(px[c]) * a / 0xffff) as u16;
        }
    }
}
