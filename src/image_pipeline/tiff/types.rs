//! Conversion configuration types

use crate::image_pipeline::band::ByteOrder;
use crate::image_pipeline::stretch::{StretchConfig, StretchMode, Thresholds};

/// Configuration for a true color conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Stretch mode and per-band thresholds
    pub stretch: StretchConfig,
    /// Byte order of the raw band files
    pub byte_order: ByteOrder,
    /// Whether to reject degenerate thresholds up front. When disabled, an inverted or
    /// equal pair is used as is and behaves as a hard cut at the low threshold.
    pub validate_thresholds: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            stretch: StretchConfig::default(),
            byte_order: ByteOrder::Native,
            validate_thresholds: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    mode: Option<StretchMode>,
    thresholds: Option<[Thresholds; 3]>,
    byte_order: Option<ByteOrder>,
    validate_thresholds: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn mode(mut self, mode: StretchMode) -> Self {
        self.mode = Some(mode);
        self
    }
    
    /// Thresholds for the blue, green and red bands, in that order.
    pub fn thresholds(mut self, thresholds: [Thresholds; 3]) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Same thresholds for every band.
    pub fn uniform_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = Some([thresholds; 3]);
        self
    }
    
    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }
    
    pub fn validate_thresholds(mut self, validate: bool) -> Self {
        self.validate_thresholds = Some(validate);
        self
    }
    
    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            stretch: StretchConfig {
                mode: self.mode.unwrap_or(default.stretch.mode),
                thresholds: self.thresholds.unwrap_or(default.stretch.thresholds),
            },
            byte_order: self.byte_order.unwrap_or(default.byte_order),
            validate_thresholds: self.validate_thresholds.unwrap_or(default.validate_thresholds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ConversionConfig::builder()
            .mode(StretchMode::Log)
            .uniform_thresholds(Thresholds::MOD09_BROWSE)
            .byte_order(ByteOrder::Big)
            .validate_thresholds(false)
            .build();

        assert_eq!(config.stretch.mode, StretchMode::Log);
        assert_eq!(config.stretch.thresholds, [Thresholds::MOD09_BROWSE; 3]);
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert!(!config.validate_thresholds);
    }

    #[test]
    fn test_builder_defaults() {
        let config = ConversionConfig::builder().build();

        assert_eq!(config.stretch.mode, StretchMode::Linear);
        assert_eq!(config.stretch.thresholds, [Thresholds::new(0.0, 10000.0); 3]);
        assert_eq!(config.byte_order, ByteOrder::Native);
        assert!(config.validate_thresholds);
    }
}
