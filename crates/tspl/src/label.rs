//! Label stock geometry and print orientation.

use serde::{Deserialize, Serialize};

use crate::{Result, TsplError};

/// Print direction as understood by the `DIRECTION` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    #[default]
    Normal,
    /// Rotated 180 degrees.
    Rotated,
}

impl Direction {
    pub fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Rotated => 1,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = TsplError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Rotated),
            other => Err(TsplError::InvalidLabelConfig(format!(
                "direction must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}

/// Physical label stock and printer orientation for one print job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelConfig {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Gap between labels. 0 is a meaningful setting (continuous stock).
    #[serde(default)]
    pub gap_mm: f64,
    #[serde(default)]
    pub direction: Direction,
    /// Reference point in dots.
    #[serde(default)]
    pub reference_x: u32,
    #[serde(default)]
    pub reference_y: u32,
}

impl LabelConfig {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            gap_mm: 0.0,
            direction: Direction::Normal,
            reference_x: 0,
            reference_y: 0,
        }
    }

    /// Builder: set the inter-label gap.
    pub fn with_gap(mut self, gap_mm: f64) -> Self {
        self.gap_mm = gap_mm;
        self
    }

    /// Builder: set the print direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder: set the reference point (dots).
    pub fn with_reference(mut self, x: u32, y: u32) -> Self {
        self.reference_x = x;
        self.reference_y = y;
        self
    }

    /// Reject geometry the printer cannot act on.
    pub fn validate(&self) -> Result<()> {
        check_positive("width", self.width_mm)?;
        check_positive("height", self.height_mm)?;
        if !self.gap_mm.is_finite() || self.gap_mm < 0.0 {
            return Err(TsplError::InvalidLabelConfig(format!(
                "gap must be a non-negative number of millimetres, got {}",
                self.gap_mm
            )));
        }
        Ok(())
    }
}

fn check_positive(name: &str, mm: f64) -> Result<()> {
    if !mm.is_finite() || mm <= 0.0 {
        return Err(TsplError::InvalidLabelConfig(format!(
            "{name} must be a positive number of millimetres, got {mm}"
        )));
    }
    Ok(())
}
