//! Print request → TSPL byte stream.
//!
//! Validates the request at the boundary, converts the image on the
//! blocking pool under a deadline, then assembles the TSPL job.

use std::time::Duration;

use base64::{Engine, engine::general_purpose};
use label_bitmap::{ConversionOptions, PackedBitmap};
use tspl::{BitmapPlacement, generate_script};

use crate::config::AppConfig;
use crate::error::PrintError;
use crate::request::{DPI_RANGE, LabelJob, LabelType, PrintRequest, dots_from_mm, strip_data_url};

/// A rendered job ready to be sent to the printer.
#[derive(Debug, Clone)]
pub struct PrintOutcome {
    pub label_type: LabelType,
    pub dpi: u32,
    pub width_px: u32,
    pub height_px: u32,
    pub width_bytes: u32,
    pub copies: u32,
    /// Full TSPL stream: setup, BITMAP header, bitmap bytes, PRINT.
    pub payload: Vec<u8>,
}

/// Render a print request into a TSPL byte stream.
pub async fn render_job(request: PrintRequest, config: &AppConfig) -> Result<PrintOutcome, PrintError> {
    let (label_type, job) = request.into_parts();
    let dpi = job.dpi.unwrap_or(config.default_dpi);
    validate_job(&job, dpi)?;
    let (width_px, height_px) = target_dots(&job, dpi, config.max_label_dots)?;

    let source = decode_image(&job.image, config.max_image_bytes)?;
    let options = ConversionOptions::new()
        .with_threshold(job.threshold.unwrap_or(config.default_threshold))
        .with_dither(job.dither);

    tracing::debug!(
        label_type = label_type.as_str(),
        dpi,
        width_px,
        height_px,
        source_bytes = source.len(),
        "Converting label image"
    );
    let bitmap = convert_blocking(source, width_px, height_px, options, config.convert_timeout()).await?;

    let (width_bytes, rows, data) = bitmap.into_parts();
    let placement = BitmapPlacement::new(width_bytes, rows, data).at(job.x, job.y);
    let copies = job.copies.unwrap_or(tspl::DEFAULT_COPIES);
    let payload = generate_script(&job.label, placement, Some(copies))?.into_bytes();

    tracing::info!(
        label_type = label_type.as_str(),
        width_px,
        height_px = rows,
        copies,
        bytes = payload.len(),
        "Rendered label"
    );

    Ok(PrintOutcome {
        label_type,
        dpi,
        width_px,
        height_px: rows,
        width_bytes,
        copies,
        payload,
    })
}

fn validate_job(job: &LabelJob, dpi: u32) -> Result<(), PrintError> {
    if !DPI_RANGE.contains(&dpi) {
        return Err(PrintError::InvalidRequest(format!(
            "dpi must be between {} and {}, got {dpi}",
            DPI_RANGE.start(),
            DPI_RANGE.end()
        )));
    }
    if job.copies == Some(0) {
        return Err(PrintError::InvalidRequest("copies must be at least 1".into()));
    }
    if strip_data_url(&job.image).is_empty() {
        return Err(PrintError::InvalidRequest("image is empty".into()));
    }
    job.label.validate()?;
    Ok(())
}

/// Dot grid for the label, bounded by `max_dots` in total.
fn target_dots(job: &LabelJob, dpi: u32, max_dots: u64) -> Result<(u32, u32), PrintError> {
    let (Some(width), Some(height)) = (
        dots_from_mm(job.label.width_mm, dpi),
        dots_from_mm(job.label.height_mm, dpi),
    ) else {
        return Err(PrintError::InvalidRequest(format!(
            "label {} mm x {} mm is too large to rasterize",
            job.label.width_mm, job.label.height_mm
        )));
    };

    let total = u64::from(width) * u64::from(height);
    if total > max_dots {
        return Err(PrintError::InvalidRequest(format!(
            "label needs {width}x{height} dots ({total}), limit is {max_dots}"
        )));
    }
    Ok((width, height))
}

/// Decode a Base64 image payload, enforcing `limit` on the decoded size.
pub fn decode_image(image: &str, limit: usize) -> Result<Vec<u8>, PrintError> {
    let encoded: String = strip_data_url(image)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    // 4 Base64 chars carry 3 bytes; reject before allocating
    let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
    let estimated = (encoded.len() / 4 * 3).saturating_sub(padding);
    if estimated > limit {
        return Err(PrintError::ImageTooLarge {
            size: estimated,
            limit,
        });
    }

    let bytes = general_purpose::STANDARD.decode(encoded.as_bytes())?;
    if bytes.len() > limit {
        return Err(PrintError::ImageTooLarge {
            size: bytes.len(),
            limit,
        });
    }
    Ok(bytes)
}

/// Run the conversion on the blocking pool, abandoning it after `deadline`.
pub async fn convert_blocking(
    source: Vec<u8>,
    width_px: u32,
    height_px: u32,
    options: ConversionOptions,
    deadline: Duration,
) -> Result<PackedBitmap, PrintError> {
    let task = tokio::task::spawn_blocking(move || {
        label_bitmap::convert(&source, width_px, height_px, &options)
    });

    match tokio::time::timeout(deadline, task).await {
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis() as u64, "Image conversion timed out");
            Err(PrintError::Timeout(deadline.as_millis() as u64))
        }
        Ok(Err(e)) => Err(PrintError::Worker(e.to_string())),
        Ok(Ok(result)) => Ok(result?),
    }
}
