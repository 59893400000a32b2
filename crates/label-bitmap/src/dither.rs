//! Floyd-Steinberg error diffusion ahead of 1-bit packing.
//!
//! The output is a grayscale image holding only 0 and 255, so packing it
//! with the same threshold yields the dithered bit pattern.

use image::{GrayImage, Luma};
use tracing::debug;

/// Apply Floyd-Steinberg dithering around `threshold`.
///
/// Error distribution pattern:
/// - Right:        7/16
/// - Bottom-left:  3/16
/// - Bottom:       5/16
/// - Bottom-right: 1/16
pub fn floyd_steinberg_dither(img: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying Floyd-Steinberg dithering");

    // i16 so diffused error can overshoot 0..=255 without wrapping
    let mut buffer: Vec<i16> = img.as_raw().iter().map(|&v| i16::from(v)).collect();
    let (w, h) = (width as usize, height as usize);

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_pixel = buffer[idx];
            let new_pixel: i16 = if old_pixel >= i16::from(threshold) {
                255
            } else {
                0
            };
            buffer[idx] = new_pixel;
            distribute_error(&mut buffer, x, y, w, h, old_pixel - new_pixel);
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        Luma([buffer[y as usize * w + x as usize].clamp(0, 255) as u8])
    })
}

fn distribute_error(buffer: &mut [i16], x: usize, y: usize, w: usize, h: usize, error: i16) {
    let idx = y * w + x;

    if x + 1 < w {
        buffer[idx + 1] += error * 7 / 16;
    }
    if y + 1 < h {
        if x > 0 {
            buffer[idx + w - 1] += error * 3 / 16;
        }
        buffer[idx + w] += error * 5 / 16;
        if x + 1 < w {
            buffer[idx + w + 1] += error / 16;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a small test image with a gradient pattern.
    fn create_gradient_image(width: u32, height: u32) -> GrayImage {
        let mut img = GrayImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let val = ((x + y) * 255 / (width + height - 2)) as u8;
                img.put_pixel(x, y, Luma([val]));
            }
        }
        img
    }

    #[test]
    fn test_dither_output_is_binary() {
        let result = floyd_steinberg_dither(&create_gradient_image(8, 8), 128);
        for (x, y, px) in result.enumerate_pixels() {
            let val = px.0[0];
            assert!(
                val == 0 || val == 255,
                "Pixel ({x}, {y}) = {val}, expected 0 or 255"
            );
        }
    }

    #[test]
    fn test_dither_preserves_dimensions() {
        let result = floyd_steinberg_dither(&create_gradient_image(10, 5), 128);
        assert_eq!(result.dimensions(), (10, 5));
    }

    #[test]
    fn test_dither_single_row_carries_error_right() {
        let mut img = GrayImage::new(2, 1);
        img.put_pixel(0, 0, Luma([100]));
        img.put_pixel(1, 0, Luma([100]));

        // 100 -> 0, then 100 + 100 * 7 / 16 = 143 -> 255
        let result = floyd_steinberg_dither(&img, 128);
        assert_eq!(result.as_raw(), &vec![0, 255]);
    }

    #[test]
    fn test_dither_thin_shapes_keep_every_pixel() {
        for (w, h) in [(1, 9), (9, 1), (1, 1), (0, 0)] {
            let img = GrayImage::from_pixel(w, h, Luma([0]));
            let result = floyd_steinberg_dither(&img, 128);
            assert_eq!(result.dimensions(), (w, h));
            assert_eq!(result.as_raw().len(), (w * h) as usize);
            assert!(result.pixels().all(|p| p.0[0] == 0));
        }
    }

    #[test]
    fn test_dither_all_white_input() {
        let img = GrayImage::from_pixel(4, 4, Luma([255]));
        let result = floyd_steinberg_dither(&img, 128);
        assert!(result.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_dither_all_black_input() {
        let img = GrayImage::from_pixel(4, 4, Luma([0]));
        let result = floyd_steinberg_dither(&img, 128);
        assert!(result.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_dither_mid_gray_mixes_ink_and_background() {
        let img = GrayImage::from_pixel(16, 16, Luma([128]));
        let result = floyd_steinberg_dither(&img, 128);
        let ink = result.pixels().filter(|p| p.0[0] == 0).count();
        assert!(ink > 0 && ink < 256, "expected a mix, got {ink} ink pixels");
    }

    #[test]
    fn test_dither_known_corners() {
        let mut img = GrayImage::new(3, 3);
        let pixels: [[u8; 3]; 3] = [[100, 150, 200], [50, 127, 250], [0, 80, 160]];
        for (y, row) in pixels.iter().enumerate() {
            for (x, &val) in row.iter().enumerate() {
                img.put_pixel(x as u32, y as u32, Luma([val]));
            }
        }

        let result = floyd_steinberg_dither(&img, 128);

        // Top-left (100) is below threshold
        assert_eq!(result.get_pixel(0, 0).0[0], 0);
        // Top-right (200) stays above threshold after diffusion
        assert_eq!(result.get_pixel(2, 0).0[0], 255);
    }
}
