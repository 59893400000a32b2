//! Individual TSPL command lines.
//!
//! Every command is newline-terminated. Millimetre values are always
//! written with two decimals.

use tracing::trace;

use crate::{BitmapPlacement, LabelConfig, Result, TsplError};

// -- Command keywords --
const CMD_SIZE: &str = "SIZE";
const CMD_GAP: &str = "GAP";
const CMD_DIRECTION: &str = "DIRECTION";
const CMD_REFERENCE: &str = "REFERENCE";
const CMD_CLS: &str = "CLS";
const CMD_BITMAP: &str = "BITMAP";
const CMD_PRINT: &str = "PRINT";

/// `BITMAP` mode 0: overwrite.
const BITMAP_MODE_OVERWRITE: u8 = 0;

/// Second `PRINT` parameter: copies of each label set. Fixed for the target hardware.
const PRINT_SETS_PER_COPY: u32 = 1;

fn format_mm(mm: f64) -> String {
    // -0.0 would print as "-0.00"
    let mm = if mm == 0.0 { 0.0 } else { mm };
    format!("{mm:.2}")
}

/// Label setup: SIZE, GAP, DIRECTION, REFERENCE, then CLS.
///
/// CLS comes last because it clears the image buffer sized by SIZE.
/// GAP is always emitted; a 0 mm gap is real printer state.
pub fn generate_setup(config: &LabelConfig) -> Result<String> {
    config.validate()?;

    let setup = format!(
        "{CMD_SIZE} {} mm, {} mm\n\
         {CMD_GAP} {} mm\n\
         {CMD_DIRECTION} {}\n\
         {CMD_REFERENCE} {}, {}\n\
         {CMD_CLS}\n",
        format_mm(config.width_mm),
        format_mm(config.height_mm),
        format_mm(config.gap_mm),
        config.direction.code(),
        config.reference_x,
        config.reference_y,
    );
    trace!(%setup, "Generated TSPL setup");
    Ok(setup)
}

/// `BITMAP` header. The raw bitmap bytes must follow it immediately.
pub fn generate_bitmap_command(placement: &BitmapPlacement) -> Result<String> {
    placement.validate()?;

    Ok(format!(
        "{CMD_BITMAP} {}, {}, {BITMAP_MODE_OVERWRITE}, {}, {}\n",
        placement.x, placement.y, placement.width_bytes, placement.height_px
    ))
}

/// `PRINT {copies}, 1`.
pub fn generate_print_command(copies: u32) -> Result<String> {
    if copies == 0 {
        return Err(TsplError::InvalidLabelConfig(
            "copies must be at least 1".into(),
        ));
    }
    Ok(format!("{CMD_PRINT} {copies}, {PRINT_SETS_PER_COPY}\n"))
}
