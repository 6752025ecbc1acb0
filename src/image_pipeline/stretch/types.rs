//! Stretch configuration types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::band::Band;
use crate::image_pipeline::common::error::{ConversionError, Result};

/// How samples are mapped between the low and high thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StretchMode {
    /// Straight linear ramp on the reflectance values
    #[default]
    Linear,
    /// Linear ramp on the natural log of the reflectance values. The base of the log
    /// cancels out in the ratio, so any base would give the same result.
    Log,
}

impl FromStr for StretchMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(StretchMode::Linear),
            "log" => Ok(StretchMode::Log),
            other => Err(ConversionError::Usage(format!("Stretching type not supported: {}", other))),
        }
    }
}

impl fmt::Display for StretchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StretchMode::Linear => f.write_str("linear"),
            StretchMode::Log => f.write_str("log"),
        }
    }
}

/// Reflectance values (scaled by 10000, not logged) stretched to 0 and 255
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Thresholds {
    /// Range used for MOD09 browse imagery, i.e. log thresholds of 5.5 and 9.0.
    pub const MOD09_BROWSE: Thresholds = Thresholds { low: 244.7, high: 8103.0 };

    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Checks that the pair describes a usable stretch for `mode`.
    pub fn validate(&self, band: Band, mode: StretchMode) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ConversionError::InvalidConfig(format!(
                "{} band thresholds must be finite, got low={} high={}",
                band, self.low, self.high
            )));
        }
        if self.high <= self.low {
            return Err(ConversionError::InvalidConfig(format!(
                "{} band high threshold ({}) must be greater than low threshold ({})",
                band, self.high, self.low
            )));
        }
        if mode == StretchMode::Log && self.low <= 0.0 {
            return Err(ConversionError::InvalidConfig(format!(
                "{} band low threshold ({}) must be positive for a log stretch",
                band, self.low
            )));
        }
        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 0.0, high: 10000.0 }
    }
}

/// Stretch mode shared by all bands plus one threshold pair per band, in blue, green, red order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StretchConfig {
    pub mode: StretchMode,
    pub thresholds: [Thresholds; 3],
}

impl StretchConfig {
    pub fn new(mode: StretchMode, thresholds: [Thresholds; 3]) -> Self {
        Self { mode, thresholds }
    }

    pub fn thresholds_for(&self, band: Band) -> Thresholds {
        self.thresholds[band.index()]
    }

    pub fn validate(&self) -> Result<()> {
        Band::ALL
            .iter()
            .try_for_each(|&band| self.thresholds_for(band).validate(band, self.mode))
    }
}
