//! 1-bit row packing.
//!
//! Layout matches the TSPL `BITMAP` payload:
//! - 8 horizontal pixels per byte, bit 7 (MSB) = leftmost pixel
//! - every row starts on a fresh byte; trailing bits of a row are 0
//! - 1 = ink (printed), 0 = background
//!
//! ```text
//! 0xAA = 10101010 = █░█░█░█░
//! 0xF8 = 11111000 = █████░░░  (5-pixel row, 3 padding bits)
//! ```

use image::GrayImage;
use tracing::debug;

/// Bytes needed to hold one row of `width_px` pixels.
pub fn width_bytes_for(width_px: u32) -> u32 {
    width_px.div_ceil(8)
}

/// A packed, row-aligned 1-bit bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width_px: u32,
    width_bytes: u32,
    height_px: u32,
    data: Vec<u8>,
}

impl PackedBitmap {
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn width_bytes(&self) -> u32 {
        self.width_bytes
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height_px {
            return None;
        }
        let wb = self.width_bytes as usize;
        let start = y as usize * wb;
        Some(&self.data[start..start + wb])
    }

    /// Whether the pixel at (`x`, `y`) is ink. Out-of-range reads are background.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width_px {
            return false;
        }
        self.row(y)
            .map(|row| row[(x / 8) as usize] & (0x80 >> (x % 8)) != 0)
            .unwrap_or(false)
    }

    /// Hand the buffer onward as `(width_bytes, height_px, data)`.
    pub fn into_parts(self) -> (u32, u32, Vec<u8>) {
        (self.width_bytes, self.height_px, self.data)
    }
}

/// Pack a grayscale image: luminance strictly below `threshold` is ink.
pub fn pack_rows(img: &GrayImage, threshold: u8) -> PackedBitmap {
    let (width, height) = img.dimensions();
    let width_bytes = width_bytes_for(width);
    let mut data = vec![0u8; width_bytes as usize * height as usize];

    if width > 0 && height > 0 {
        let src_rows = img.as_raw().chunks_exact(width as usize);
        let dst_rows = data.chunks_exact_mut(width_bytes as usize);
        for (src, dst) in src_rows.zip(dst_rows) {
            for (x, &luma) in src.iter().enumerate() {
                if luma < threshold {
                    dst[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
    }

    debug!(width, height, width_bytes, threshold, "Packed bitmap rows");

    PackedBitmap {
        width_px: width,
        width_bytes,
        height_px: height,
        data,
    }
}
