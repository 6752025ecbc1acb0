//! Image processing pipeline module
//!
//! This module turns three raw 16-bit reflectance bands (blue, green, red) into an
//! 8-bit true color RGB TIFF. Each stage lives in its own module: band loading,
//! stretching, raster assembly, TIFF writing, and the orchestration that ties them together.

pub mod band;
pub mod stretch;
pub mod raster;
pub mod tiff;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
    PipelineTimings,
    StepTiming,
    Timer,
};

pub use band::{
    Band,
    BandBuffer,
    BandReader,
    ByteOrder,
    Dimensions,
    RawBandReader,
};

pub use stretch::{
    BandStretch,
    StretchConfig,
    StretchMode,
    Thresholds,
};

pub use raster::{
    RgbRaster,
    assemble_rgb,
};

pub use self::tiff::{
    ConversionConfig,
    ConversionConfigBuilder,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    TrueColorPipeline,
};
