//! 1bpp bitmap packing.
//!
//! Rows are packed MSB first, 8 pixels per byte. Every row starts on a fresh
//! byte; a partial trailing byte is left-aligned and padded with zero bits.

use image::{GenericImageView, Rgba};
use tracing::debug;

use crate::luma::Threshold;

/// Number of bytes a `width` x `height` bitmap packs into.
pub fn packed_len(width: u32, height: u32) -> usize {
    row_stride(width) * height as usize
}

fn row_stride(width: u32) -> usize {
    width.div_ceil(8) as usize
}

/// A packed monochrome bitmap: 1 = ink, 0 = background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PackedBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
impl PackedBitmap {
    fn stride(&self) -> usize {
        row_stride(self.width)
    }

    fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size; a zero-width bitmap has no data anyway
        self.data.chunks(self.stride().max(1))
    }

    /// Out-of-range coordinates read as background.
    fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.stride() + (x / 8) as usize];
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// Pack a pixel grid into a 1bpp bitmap.
///
/// Pixels whose luminance falls below the threshold become ink. A grid with
/// zero width or height packs to an empty bitmap.
pub fn pack_bitmap<I>(img: &I, threshold: &Threshold) -> PackedBitmap
where
    I: GenericImageView<Pixel = Rgba<u16>>,
{
    let (width, height) = img.dimensions();
    debug!(
        width,
        height,
        model = %threshold.model,
        cutoff = threshold.cutoff,
        "Packing bitmap"
    );

    let mut data = Vec::with_capacity(packed_len(width, height));
    for y in 0..height {
        let mut acc: u8 = 0;
        let mut bits: u32 = 0;
        for x in 0..width {
            let bit = u8::from(threshold.is_ink(img.get_pixel(x, y)));
            acc = (acc << 1) | bit;
            bits += 1;

            if bits == 8 {
                data.push(acc);
                acc = 0;
                bits = 0;
            }
        }
        if bits > 0 {
            data.push(acc << (8 - bits));
        }
    }

    debug_assert_eq!(data.len(), packed_len(width, height));
    debug!(bytes = data.len(), "Bitmap packed");

    PackedBitmap {
        width,
        height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luma::LuminanceModel;
    use crate::load::Rgba16Image;

    const INK: Rgba<u16> = Rgba([0, 0, 0, u16::MAX]);
    const PAPER: Rgba<u16> = Rgba([u16::MAX, u16::MAX, u16::MAX, u16::MAX]);

    /// Every row alternates ink/paper starting with ink at column 0.
    fn striped_image(width: u32, height: u32) -> Rgba16Image {
        Rgba16Image::from_fn(width, height, |x, _| if x % 2 == 0 { INK } else { PAPER })
    }

    /// Classic checkerboard, ink at (0, 0).
    fn checkerboard(width: u32, height: u32) -> Rgba16Image {
        Rgba16Image::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 { INK } else { PAPER }
        })
    }

    #[test]
    fn test_length_invariant() {
        let threshold = Threshold::default();
        for (w, h) in [(0, 0), (0, 5), (5, 0), (1, 1), (7, 3), (8, 2), (9, 4), (296, 128)] {
            let img = Rgba16Image::from_pixel(w, h, PAPER);
            let packed = pack_bitmap(&img, &threshold);
            assert_eq!(packed.data().len(), packed_len(w, h), "{w}x{h}");
            assert_eq!(packed.data().len(), h as usize * (w as usize).div_ceil(8));
        }
    }

    #[test]
    fn test_empty_image_packs_to_nothing() {
        let packed = pack_bitmap(&Rgba16Image::new(0, 0), &Threshold::default());
        assert!(packed.data().is_empty());
        assert_eq!(packed.rows().count(), 0);
    }

    #[test]
    fn test_black_row_pads_with_zero_bits() {
        let img = Rgba16Image::from_pixel(5, 2, INK);
        let packed = pack_bitmap(&img, &Threshold::default());
        assert_eq!(packed.data(), &[0xF8, 0xF8]);
    }

    #[test]
    fn test_white_image_is_all_background() {
        let img = Rgba16Image::from_pixel(16, 3, PAPER);
        let packed = pack_bitmap(&img, &Threshold::default());
        assert!(packed.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_alternating_width_4() {
        let packed = pack_bitmap(&striped_image(4, 4), &Threshold::default());
        assert_eq!(packed.data(), &[0xA0; 4]);
    }

    #[test]
    fn test_alternating_width_5() {
        let packed = pack_bitmap(&striped_image(5, 3), &Threshold::default());
        assert_eq!(packed.data(), &[0xA8; 3]);
    }

    #[test]
    fn test_checkerboard_rows_alternate_phase() {
        let packed = pack_bitmap(&checkerboard(4, 4), &Threshold::default());
        assert_eq!(packed.data(), &[0xA0, 0x50, 0xA0, 0x50]);
    }

    #[test]
    fn test_rows_do_not_share_bytes() {
        // 10 wide: 8 bits in the first byte, 2 in the second, per row
        let packed = pack_bitmap(&Rgba16Image::from_pixel(10, 2, INK), &Threshold::default());
        assert_eq!(packed.stride(), 2);
        assert_eq!(packed.data(), &[0xFF, 0xC0, 0xFF, 0xC0]);
        let rows: Vec<&[u8]> = packed.rows().collect();
        let expected: [&[u8]; 2] = [&[0xFF, 0xC0], &[0xFF, 0xC0]];
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_single_black_pixel() {
        let packed = pack_bitmap(&Rgba16Image::from_pixel(1, 1, INK), &Threshold::default());
        assert_eq!(packed.data(), &[0x80]);
        assert_eq!((packed.width(), packed.height()), (1, 1));
    }

    #[test]
    fn test_is_ink_reads_back_pixels() {
        let img = checkerboard(11, 3);
        let packed = pack_bitmap(&img, &Threshold::default());
        for y in 0..3 {
            for x in 0..11 {
                assert_eq!(packed.is_ink(x, y), (x + y) % 2 == 0, "({x}, {y})");
            }
        }
        assert!(!packed.is_ink(11, 0));
        assert!(!packed.is_ink(0, 3));
    }

    #[test]
    fn test_threshold_model_changes_result() {
        // Pure red reads 19532 under grayscale and 19594 under perceptual
        let red = Rgba([u16::MAX, 0, 0, u16::MAX]);
        let img = Rgba16Image::from_pixel(8, 1, red);
        let low = 19600;
        let gray = pack_bitmap(&img, &Threshold::new(LuminanceModel::Grayscale, low));
        let perceptual = pack_bitmap(&img, &Threshold::new(LuminanceModel::Perceptual, low));
        assert_eq!(gray.data(), &[0xFF]);
        assert_eq!(perceptual.data(), &[0xFF]);

        let lower = 19550;
        let gray = pack_bitmap(&img, &Threshold::new(LuminanceModel::Grayscale, lower));
        let perceptual = pack_bitmap(&img, &Threshold::new(LuminanceModel::Perceptual, lower));
        assert_eq!(gray.data(), &[0xFF]);
        assert_eq!(perceptual.data(), &[0x00]);
    }
}
