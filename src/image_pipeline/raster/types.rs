//! RGB raster types

use crate::image_pipeline::band::Dimensions;

/// 8-bit RGB image, pixels interleaved [R, G, B, R, G, B, ...] in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct RgbRaster {
    dims: Dimensions,
    data: Vec<u8>,
}

impl RgbRaster {
    pub const SAMPLES_PER_PIXEL: usize = 3;

    /// `data` must hold exactly `dims.pixel_count() * 3` bytes.
    pub(crate) fn from_parts(dims: Dimensions, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), dims.pixel_count() * Self::SAMPLES_PER_PIXEL);
        Self { dims, data }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.cols()
    }

    pub fn height(&self) -> usize {
        self.dims.rows()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// `[r, g, b]` at the given position, or `None` outside the image.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        if row >= self.dims.rows() || col >= self.dims.cols() {
            return None;
        }
        let at = (row * self.dims.cols() + col) * Self::SAMPLES_PER_PIXEL;
        Some([self.data[at], self.data[at + 1], self.data[at + 2]])
    }
}
