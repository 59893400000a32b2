//! Image → packed bitmap pipeline.
//!
//! decode → resample (fill) → flatten onto white → luminance → binarize → pack.

use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use tracing::debug;

use crate::dither::floyd_steinberg_dither;
use crate::pack::{PackedBitmap, pack_rows, width_bytes_for};
use crate::resize::{ensure_dimensions, resize_fill};
use crate::{BitmapError, ConversionOptions, Result};

/// Convert an encoded raster image into a packed bitmap of exactly
/// `target_width_px` x `target_height_px` dots.
pub fn convert(
    source: &[u8],
    target_width_px: u32,
    target_height_px: u32,
    options: &ConversionOptions,
) -> Result<PackedBitmap> {
    check_dimensions(target_width_px, target_height_px)?;

    let img = image::load_from_memory(source)?;
    debug!(
        src_width = img.width(),
        src_height = img.height(),
        bytes = source.len(),
        "Decoded source image"
    );

    convert_image(img, target_width_px, target_height_px, options)
}

/// Same as [`convert`] for an already decoded image.
pub fn convert_image(
    img: DynamicImage,
    target_width_px: u32,
    target_height_px: u32,
    options: &ConversionOptions,
) -> Result<PackedBitmap> {
    check_dimensions(target_width_px, target_height_px)?;

    let resized = resize_fill(img, target_width_px, target_height_px);
    ensure_dimensions(&resized, target_width_px, target_height_px)?;

    let gray = luminance(&resized);
    let packed = if options.dither {
        pack_rows(&floyd_steinberg_dither(&gray, options.threshold), options.threshold)
    } else {
        pack_rows(&gray, options.threshold)
    };

    let expected = width_bytes_for(target_width_px) as usize * target_height_px as usize;
    if packed.data().len() != expected {
        return Err(BitmapError::Packing {
            expected,
            actual: packed.data().len(),
        });
    }

    Ok(packed)
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Single-channel luminance. Translucent pixels are composited over white
/// so transparent regions stay unprinted.
fn luminance(img: &DynamicImage) -> GrayImage {
    if !img.color().has_alpha() {
        return img.to_luma8();
    }

    let rgba = img.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in flat.pixels_mut().zip(rgba.pixels()) {
        let alpha = u16::from(src[3]);
        let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        *dst = Rgb([blend(src[0]), blend(src[1]), blend(src[2])]);
    }
    DynamicImage::ImageRgb8(flat).to_luma8()
}
