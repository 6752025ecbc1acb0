//! Band reading module
//!
//! This module loads flat, headerless arrays of signed 16-bit reflectance samples.
//! Dimensions are supplied out-of-band by the caller.

mod reader;
mod raw_band_reader;
pub mod types;

pub use reader::BandReader;
pub use raw_band_reader::RawBandReader;
pub use types::{Band, BandBuffer, ByteOrder, Dimensions};
