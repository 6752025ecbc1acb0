//! Pipeline conversions module
//!
//! This module contains the orchestration that runs the band reader, stretch,
//! assembler and TIFF writer in sequence.

mod true_color;


pub use true_color::TrueColorPipeline;
