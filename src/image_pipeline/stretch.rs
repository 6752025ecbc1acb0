//! Brightness stretch module
//!
//! Maps raw reflectance samples onto the 8-bit output range, one band at a time.

mod band_stretch;
pub mod types;

pub use band_stretch::BandStretch;
pub use types::{StretchConfig, StretchMode, Thresholds};
