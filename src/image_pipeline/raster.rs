//! RGB raster module
//!
//! Interleaves the three stretched bands into one chunky RGB buffer.

mod assembler;
pub mod types;

pub use assembler::assemble_rgb;
pub use types::RgbRaster;
