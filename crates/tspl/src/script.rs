//! Full print script assembly.

use tracing::debug;

use crate::command::{generate_bitmap_command, generate_print_command, generate_setup};
use crate::{BitmapPlacement, DEFAULT_COPIES, LabelConfig, Result};

/// A generated TSPL job: text preamble, raw bitmap payload and PRINT line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsplScript {
    preamble: String,
    bitmap_data: Vec<u8>,
    print_command: String,
}

impl TsplScript {
    /// Setup commands followed by the `BITMAP` header.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn bitmap_data(&self) -> &[u8] {
        &self.bitmap_data
    }

    pub fn print_command(&self) -> &str {
        &self.print_command
    }

    /// All text commands (setup, BITMAP header, PRINT) without the payload.
    pub fn command_string(&self) -> String {
        format!("{}{}", self.preamble, self.print_command)
    }

    /// Length of the transmit stream produced by [`Self::into_bytes`].
    pub fn byte_len(&self) -> usize {
        self.preamble.len() + self.bitmap_data.len() + self.print_command.len()
    }

    /// The byte stream to transmit: preamble, bitmap bytes, PRINT.
    ///
    /// The bitmap bytes sit directly after the `BITMAP` header line.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut buf = self.preamble.into_bytes();
        buf.reserve(self.bitmap_data.len() + self.print_command.len());
        buf.extend_from_slice(&self.bitmap_data);
        buf.extend_from_slice(self.print_command.as_bytes());
        buf
    }
}

/// Build a complete script. `copies` defaults to [`DEFAULT_COPIES`].
pub fn generate_script(
    config: &LabelConfig,
    placement: BitmapPlacement,
    copies: Option<u32>,
) -> Result<TsplScript> {
    let copies = copies.unwrap_or(DEFAULT_COPIES);

    let mut preamble = generate_setup(config)?;
    preamble.push_str(&generate_bitmap_command(&placement)?);
    let print_command = generate_print_command(copies)?;

    debug!(
        width_mm = config.width_mm,
        height_mm = config.height_mm,
        width_bytes = placement.width_bytes,
        height_px = placement.height_px,
        copies,
        "Generated TSPL script"
    );

    Ok(TsplScript {
        preamble,
        bitmap_data: placement.bitmap_data,
        print_command,
    })
}

/// Concatenate a command string (as UTF-8 bytes) and a bitmap payload.
pub fn combine(command: &str, bitmap_data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(command.len() + bitmap_data.len());
    buf.extend_from_slice(command.as_bytes());
    buf.extend_from_slice(bitmap_data);
    buf
}
