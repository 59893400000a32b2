//! Resampling onto the label's dot grid.
//!
//! Labels have a fixed physical size, so the source is stretched to the
//! exact target grid ("fill"); aspect ratio is not preserved.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::{BitmapError, Result};

/// Resample an image to exactly `width` x `height` using Lanczos3.
///
/// Takes ownership so an image already on the target grid is passed
/// through without a copy.
pub fn resize_fill(img: DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == width && orig_h == height {
        debug!(width, height, "Image already on target grid, skipping resample");
        return img;
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        "Resampling image to label grid"
    );

    img.resize_exact(width, height, FilterType::Lanczos3)
}

/// Check that a resampled image landed on the requested grid.
pub fn ensure_dimensions(img: &DynamicImage, width: u32, height: u32) -> Result<()> {
    if img.width() == width && img.height() == height {
        return Ok(());
    }
    Err(BitmapError::Resample {
        expected_width: width,
        expected_height: height,
        actual_width: img.width(),
        actual_height: img.height(),
    })
}
