//! TIFF writing module
//!
//! This module writes the assembled raster as a single-strip, uncompressed RGB TIFF,
//! and holds the conversion configuration.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder};
