//! Conversion options.
//!
//! Controls how resampled luminance is turned into ink/background bits.

use crate::DEFAULT_THRESHOLD;

/// Options for [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Luminance cutoff. Pixels strictly darker than this become ink.
    pub threshold: u8,

    /// Diffuse quantization error (Floyd-Steinberg) before thresholding.
    /// Output is still one bit per pixel.
    pub dither: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            dither: false,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the luminance threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder: enable or disable error-diffusion dithering.
    pub fn with_dither(mut self, dither: bool) -> Self {
        self.dither = dither;
        self
    }
}
