//! TSPL (Thermal Printer Script Language) command generation.
//!
//! Builds the text commands a TSPL label printer expects around a packed
//! 1-bit bitmap and assembles the final byte stream:
//!
//! ```text
//! SIZE 50.00 mm, 30.00 mm
//! GAP 2.00 mm
//! DIRECTION 0
//! REFERENCE 0, 0
//! CLS
//! BITMAP 0, 0, 0, 10, 80
//! <800 raw bitmap bytes>
//! PRINT 1, 1
//! ```
//!
//! Command spelling, casing and order are dictated by printer firmware.

pub mod command;
pub mod label;
pub mod placement;
pub mod script;

// Re-exports for convenience
pub use command::{generate_bitmap_command, generate_print_command, generate_setup};
pub use label::{Direction, LabelConfig};
pub use placement::BitmapPlacement;
pub use script::{TsplScript, combine, generate_script};

/// Number of label sets printed when the caller does not say otherwise.
pub const DEFAULT_COPIES: u32 = 1;

/// Errors raised while validating inputs for command generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TsplError {
    #[error("Invalid label config: {0}")]
    InvalidLabelConfig(String),

    #[error("Invalid bitmap placement: {0}")]
    InvalidBitmap(String),
}

/// Result type alias for TSPL generation.
pub type Result<T> = std::result::Result<T, TsplError>;
