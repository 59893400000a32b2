//! Raster-to-bitmap conversion for thermal label printers.
//!
//! Decodes an encoded image, resamples it onto the exact dot grid of the
//! label (fill mode, Lanczos3), binarizes it by luminance and packs it into
//! a row-aligned, MSB-first 1-bit bitmap as expected by the printer's
//! `BITMAP` command.

pub mod convert;
pub mod dither;
pub mod options;
pub mod pack;
pub mod resize;

// Re-exports for convenience
pub use convert::{convert, convert_image};
pub use dither::floyd_steinberg_dither;
pub use options::ConversionOptions;
pub use pack::{PackedBitmap, pack_rows, width_bytes_for};
pub use resize::resize_fill;

/// Default luminance cutoff: values strictly below this are printed as ink.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Errors that can occur while converting an image into a packed bitmap.
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    #[error("Failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(
        "Resampled image is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    Resample {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Invalid target dimensions {width}x{height}: both must be greater than 0")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Packed bitmap holds {actual} bytes, expected {expected}")]
    Packing { expected: usize, actual: usize },
}

impl BitmapError {
    /// Whether the error reflects a defect in the pipeline rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Resample { .. } | Self::Packing { .. })
    }
}

/// Result type alias for bitmap conversion.
pub type Result<T> = std::result::Result<T, BitmapError>;
