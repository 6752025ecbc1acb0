//! Command line interface
//!
//! Arguments are positional and in a fixed order:
//!
//! ```text
//! truecolor_tiff <linear|log> <rows> <cols>
//!                <b1> <b1.low> <b1.high>
//!                <b2> <b2.low> <b2.high>
//!                <b3> <b3.low> <b3.high>
//!                <out.tif>
//! ```
//!
//! Bands must be given as blue, green, red. Thresholds are reflectance scaled by 10000,
//! not logged.

use std::path::PathBuf;

use clap::Parser;

use crate::image_pipeline::{ByteOrder, ConversionConfig, Dimensions, Result, StretchMode, Thresholds};

#[derive(Parser, Debug)]
#[command(name = "truecolor_tiff")]
#[command(version, about = "Stretch blue, green and red reflectance bands into an 8-bit RGB TIFF")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Stretch type: linear or log
    pub stretch: String,

    /// Number of rows in every band
    pub rows: usize,

    /// Number of columns in every band
    pub cols: usize,

    /// Raw int16 file for the blue band
    pub blue_path: PathBuf,
    pub blue_low: f64,
    pub blue_high: f64,

    /// Raw int16 file for the green band
    pub green_path: PathBuf,
    pub green_low: f64,
    pub green_high: f64,

    /// Raw int16 file for the red band
    pub red_path: PathBuf,
    pub red_low: f64,
    pub red_high: f64,

    /// Output TIFF path
    pub output: PathBuf,

    /// Byte order of the input samples
    #[arg(long, value_enum, default_value_t = ByteOrder::Native)]
    pub byte_order: ByteOrder,

    /// Accept inverted or equal thresholds instead of failing
    #[arg(long)]
    pub legacy_thresholds: bool,
}

impl Cli {
    pub fn mode(&self) -> Result<StretchMode> {
        self.stretch.parse()
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.rows, self.cols)
    }

    pub fn thresholds(&self) -> [Thresholds; 3] {
        [
            Thresholds::new(self.blue_low, self.blue_high),
            Thresholds::new(self.green_low, self.green_high),
            Thresholds::new(self.red_low, self.red_high),
        ]
    }

    pub fn band_paths(&self) -> [PathBuf; 3] {
        [self.blue_path.clone(), self.green_path.clone(), self.red_path.clone()]
    }

    pub fn config(&self) -> Result<ConversionConfig> {
        Ok(ConversionConfig::builder()
            .mode(self.mode()?)
            .thresholds(self.thresholds())
            .byte_order(self.byte_order)
            .validate_thresholds(!self.legacy_thresholds)
            .build())
    }
}
