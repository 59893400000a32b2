//! Errors raised while turning a print request into a printer payload.

use label_bitmap::BitmapError;
use tspl::TsplError;

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Image is not valid Base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image is {size} bytes, limit is {limit}")]
    ImageTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    #[error(transparent)]
    Tspl(#[from] TsplError),

    #[error("Image conversion did not finish within {0} ms")]
    Timeout(u64),

    #[error("Image conversion task failed: {0}")]
    Worker(String),
}

impl PrintError {
    /// HTTP status code reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) | Self::Base64(_) | Self::Tspl(_) => 400,
            Self::ImageTooLarge { .. } => 413,
            Self::Bitmap(e) if e.is_internal() => 500,
            Self::Bitmap(_) => 400,
            Self::Timeout(_) => 504,
            Self::Worker(_) => 500,
        }
    }
}
