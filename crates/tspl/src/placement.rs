//! Packed bitmap plus its position on the label canvas.

use crate::{Result, TsplError};

/// A row-aligned, MSB-first 1-bit bitmap placed at (`x`, `y`) dots.
///
/// Owns its buffer; the generator moves it into the final script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapPlacement {
    pub width_bytes: u32,
    pub height_px: u32,
    pub bitmap_data: Vec<u8>,
    pub x: u32,
    pub y: u32,
}

impl BitmapPlacement {
    /// Place a bitmap at the origin.
    pub fn new(width_bytes: u32, height_px: u32, bitmap_data: Vec<u8>) -> Self {
        Self {
            width_bytes,
            height_px,
            bitmap_data,
            x: 0,
            y: 0,
        }
    }

    /// Builder: move the bitmap to (`x`, `y`) dots.
    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Payload length implied by the header fields.
    pub fn expected_len(&self) -> usize {
        self.width_bytes as usize * self.height_px as usize
    }

    /// The printer reads exactly `width_bytes * height_px` bytes after the header.
    pub fn validate(&self) -> Result<()> {
        if self.width_bytes == 0 || self.height_px == 0 {
            return Err(TsplError::InvalidBitmap(format!(
                "bitmap must be at least 1 byte wide and 1 row tall, got {}x{}",
                self.width_bytes, self.height_px
            )));
        }
        if self.bitmap_data.len() != self.expected_len() {
            return Err(TsplError::InvalidBitmap(format!(
                "bitmap data holds {} bytes, header declares {}",
                self.bitmap_data.len(),
                self.expected_len()
            )));
        }
        Ok(())
    }
}
