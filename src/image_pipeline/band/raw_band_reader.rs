//! Reader for headerless band files.
//!
//! A band file is nothing but `rows * cols` signed 16-bit samples in row-major order.
//! There is no header, so the expected size must be given by the caller and the byte
//! order comes from configuration.

use std::io::Read;

use tracing::{debug, warn};
use crate::image_pipeline::common::error::{try_alloc, ConversionError, Result};
use crate::image_pipeline::band::types::{Band, BandBuffer, ByteOrder, Dimensions};
use crate::image_pipeline::band::reader::BandReader;

/// Size in bytes of one stored sample.
const SAMPLE_BYTES: usize = 2;

/// Reads raw signed 16-bit band files.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBandReader {
    byte_order: ByteOrder,
}

impl RawBandReader {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }
}

impl BandReader for RawBandReader {
    /// Reads exactly `dims.pixel_count()` samples from `input`.
    ///
    /// # Returns
    ///
    /// * `Ok(BandBuffer)` - The band's samples
    /// * `Err(ConversionError::SizeMismatch)` - The input ended before enough samples were read
    /// * `Err(ConversionError::InputReadError)` - The input could not be read
    /// * `Err(ConversionError::AllocationError)` - The band does not fit in memory
    ///
    /// Anything after the expected samples is left unread and only logged.
    fn read_band(&self, band: Band, input: &mut dyn Read, dims: Dimensions) -> Result<BandBuffer> {
        let expected = dims.pixel_count();
        let expected_bytes = expected
            .checked_mul(SAMPLE_BYTES)
            .ok_or(ConversionError::InvalidDimensions(dims.rows(), dims.cols()))?;

        debug!("Reading {} band: {} samples, {:?} byte order", band, expected, self.byte_order);

        let mut bytes = try_alloc::<u8>(expected_bytes, "band read buffer")?;
        (&mut *input)
            .take(expected_bytes as u64)
            .read_to_end(&mut bytes)
            .map_err(|e| ConversionError::InputReadError(format!("{} band: {}", band, e)))?;

        if bytes.len() < expected_bytes {
            return Err(ConversionError::SizeMismatch {
                band: band.name().to_string(),
                expected,
                actual: bytes.len() / SAMPLE_BYTES,
            });
        }

        let mut probe = [0u8; 1];
        if matches!(input.read(&mut probe), Ok(n) if n > 0) {
            warn!("{} band has data beyond {} samples, ignoring the rest", band, expected);
        }

        let mut samples = try_alloc::<i16>(expected, "band samples")?;
        samples.extend(
            bytes
                .chunks_exact(SAMPLE_BYTES)
                .map(|pair| self.byte_order.decode([pair[0], pair[1]])),
        );

        Ok(BandBuffer::new(band, samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn le_bytes(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_reads_exact_sample_count() {
        let dims = Dimensions::new(2, 2).unwrap();
        let reader = RawBandReader::new(ByteOrder::Little);
        let mut input = Cursor::new(le_bytes(&[-9999, 0, 100, 8103]));

        let buffer = reader.read_band(Band::Green, &mut input, dims).unwrap();

        assert_eq!(buffer.band(), Band::Green);
        assert_eq!(buffer.samples(), &[-9999, 0, 100, 8103]);
    }

    #[test]
    fn test_big_endian_input() {
        let dims = Dimensions::new(1, 2).unwrap();
        let reader = RawBandReader::new(ByteOrder::Big);
        let bytes: Vec<u8> = [1000i16, -2].iter().flat_map(|s| s.to_be_bytes()).collect();

        let buffer = reader.read_band(Band::Red, &mut Cursor::new(bytes), dims).unwrap();
        assert_eq!(buffer.samples(), &[1000, -2]);
    }

    #[test]
    fn test_short_read_is_size_mismatch() {
        let dims = Dimensions::new(2, 3).unwrap();
        let reader = RawBandReader::new(ByteOrder::Little);
        // five full samples and a dangling byte
        let mut bytes = le_bytes(&[1, 2, 3, 4, 5]);
        bytes.push(0xff);

        let err = reader.read_band(Band::Blue, &mut Cursor::new(bytes), dims).unwrap_err();
        match err {
            ConversionError::SizeMismatch { band, expected, actual } => {
                assert_eq!(band, "blue");
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_data_is_ignored() {
        let dims = Dimensions::new(1, 2).unwrap();
        let reader = RawBandReader::new(ByteOrder::Little);
        let mut input = Cursor::new(le_bytes(&[7, 8, 9, 10]));

        let buffer = reader.read_band(Band::Blue, &mut input, dims).unwrap();
        assert_eq!(buffer.samples(), &[7, 8]);
    }
}
