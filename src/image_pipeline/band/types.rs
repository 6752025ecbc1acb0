//! Band data types

use std::fmt;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Spectral band, in the order the bands are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Blue,
    Green,
    Red,
}

impl Band {
    /// Input order: blue, green, red.
    pub const ALL: [Band; 3] = [Band::Blue, Band::Green, Band::Red];

    pub fn index(self) -> usize {
        match self {
            Band::Blue => 0,
            Band::Green => 1,
            Band::Red => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Blue => "blue",
            Band::Green => "green",
            Band::Red => "red",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of the 16-bit samples in a raw band file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ByteOrder {
    /// Whatever the host uses. Files written on a machine of the other endianness will
    /// decode as garbage without any error.
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    pub fn decode(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::Native => i16::from_ne_bytes(bytes),
            ByteOrder::Little => i16::from_le_bytes(bytes),
            ByteOrder::Big => i16::from_be_bytes(bytes),
        }
    }
}

/// Raster size shared by all three bands and the output image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Both sides must be positive, fit a TIFF dimension field, and the RGB raster
    /// (`rows * cols * 3` bytes) must be addressable.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows > u32::MAX as usize || cols > u32::MAX as usize {
            return Err(ConversionError::InvalidDimensions(rows, cols));
        }
        rows.checked_mul(cols)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ConversionError::InvalidDimensions(rows, cols))?;
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pixel_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// One band's samples in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct BandBuffer {
    band: Band,
    samples: Vec<i16>,
}

impl BandBuffer {
    pub fn new(band: Band, samples: Vec<i16>) -> Self {
        Self { band, samples }
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
