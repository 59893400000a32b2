//! Print request payloads accepted over HTTP.

use serde::Deserialize;
use tspl::LabelConfig;

/// Millimetres per inch.
const MM_PER_INCH: f64 = 25.4;

/// Accepted printer resolutions.
pub const DPI_RANGE: std::ops::RangeInclusive<u32> = 100..=600;

/// Label family a request is printed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelType {
    Ingredient,
    Menu,
    Ppds,
}

impl LabelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Menu => "menu",
            Self::Ppds => "ppds",
        }
    }
}

/// A print request, tagged by `labelType`.
///
/// Every label family carries the same job fields; the tag only selects
/// how the result is reported and logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "labelType", rename_all = "lowercase")]
pub enum PrintRequest {
    Ingredient(LabelJob),
    Menu(LabelJob),
    Ppds(LabelJob),
}

impl PrintRequest {
    pub fn label_type(&self) -> LabelType {
        match self {
            Self::Ingredient(_) => LabelType::Ingredient,
            Self::Menu(_) => LabelType::Menu,
            Self::Ppds(_) => LabelType::Ppds,
        }
    }

    pub fn into_parts(self) -> (LabelType, LabelJob) {
        let label_type = self.label_type();
        match self {
            Self::Ingredient(job) | Self::Menu(job) | Self::Ppds(job) => (label_type, job),
        }
    }
}

/// Fields shared by every label family.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelJob {
    /// Source image as Base64, optionally with a `data:` URL prefix.
    pub image: String,
    pub label: LabelConfig,
    #[serde(default)]
    pub dpi: Option<u32>,
    #[serde(default)]
    pub copies: Option<u32>,
    #[serde(default)]
    pub threshold: Option<u8>,
    #[serde(default)]
    pub dither: bool,
    /// Bitmap position on the label, in dots.
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
}

/// Convert millimetres to printer dots, rounding up.
///
/// `None` when the result does not fit in `u32`.
pub fn dots_from_mm(mm: f64, dpi: u32) -> Option<u32> {
    let dots = mm * f64::from(dpi) / MM_PER_INCH;
    // 25.4 mm at 203 DPI would otherwise come out as 203.00000000000003
    let dots = ((dots * 1e6).round() / 1e6).ceil();
    if !dots.is_finite() || dots < 0.0 || dots > f64::from(u32::MAX) {
        return None;
    }
    Some(dots as u32)
}

/// Strip an optional `data:<mime>;base64,` prefix.
pub fn strip_data_url(image: &str) -> &str {
    let image = image.trim();
    match image.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dots_from_mm_rounds_up() {
        assert_eq!(dots_from_mm(24.0, 203), Some(192));
        assert_eq!(dots_from_mm(80.0, 203), Some(640));
        assert_eq!(dots_from_mm(50.0, 300), Some(591));
    }

    #[test]
    fn dots_from_mm_exact_inches() {
        assert_eq!(dots_from_mm(25.4, 203), Some(203));
        assert_eq!(dots_from_mm(50.8, 300), Some(600));
    }

    #[test]
    fn dots_from_mm_rejects_values_past_u32() {
        assert_eq!(dots_from_mm(1e12, 203), None);
        assert_eq!(dots_from_mm(f64::INFINITY, 203), None);
        assert_eq!(dots_from_mm(f64::NAN, 203), None);
        assert_eq!(dots_from_mm(5000.0, 600), Some(118_111));
    }

    #[test]
    fn deserializes_each_label_type() {
        for (tag, expected) in [
            ("ingredient", LabelType::Ingredient),
            ("menu", LabelType::Menu),
            ("ppds", LabelType::Ppds),
        ] {
            let request: PrintRequest = serde_json::from_value(json!({
                "labelType": tag,
                "image": "AAAA",
                "label": { "widthMm": 24.0, "heightMm": 80.0 },
            }))
            .unwrap();
            assert_eq!(request.label_type(), expected);
            assert_eq!(request.label_type().as_str(), tag);
        }
    }

    #[test]
    fn job_defaults() {
        let request: PrintRequest = serde_json::from_value(json!({
            "labelType": "menu",
            "image": "AAAA",
            "label": { "widthMm": 50.0, "heightMm": 30.0, "gapMm": 2.0 },
        }))
        .unwrap();
        let (_, job) = request.into_parts();
        assert_eq!(job.dpi, None);
        assert_eq!(job.copies, None);
        assert_eq!(job.threshold, None);
        assert!(!job.dither);
        assert_eq!((job.x, job.y), (0, 0));
        assert_eq!(job.label.gap_mm, 2.0);
    }

    #[test]
    fn job_overrides() {
        let request: PrintRequest = serde_json::from_value(json!({
            "labelType": "ppds",
            "image": "AAAA",
            "label": { "widthMm": 50.0, "heightMm": 30.0, "direction": 1 },
            "dpi": 300,
            "copies": 3,
            "threshold": 100,
            "dither": true,
            "x": 8,
            "y": 16,
        }))
        .unwrap();
        let (label_type, job) = request.into_parts();
        assert_eq!(label_type, LabelType::Ppds);
        assert_eq!(job.dpi, Some(300));
        assert_eq!(job.copies, Some(3));
        assert_eq!(job.threshold, Some(100));
        assert!(job.dither);
        assert_eq!((job.x, job.y), (8, 16));
        assert_eq!(job.label.direction, tspl::Direction::Rotated);
    }

    #[test]
    fn rejects_unknown_label_type() {
        let result: Result<PrintRequest, _> = serde_json::from_value(json!({
            "labelType": "shipping",
            "image": "AAAA",
            "label": { "widthMm": 50.0, "heightMm": 30.0 },
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_image() {
        let result: Result<PrintRequest, _> = serde_json::from_value(json!({
            "labelType": "menu",
            "label": { "widthMm": 50.0, "heightMm": 30.0 },
        }));
        assert!(result.is_err());
    }

    #[test]
    fn strips_data_url_prefix() {
        assert_eq!(strip_data_url("data:image/png;base64,iVBOR"), "iVBOR");
        assert_eq!(strip_data_url("  iVBOR\n"), "iVBOR");
        assert_eq!(strip_data_url("iVBOR"), "iVBOR");
    }
}
