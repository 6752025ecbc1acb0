use tracing::debug;

use crate::image_pipeline::band::Dimensions;
use crate::image_pipeline::common::error::{try_alloc, ConversionError, Result};
use crate::image_pipeline::raster::types::RgbRaster;

/// Interleaves stretched bands into an RGB raster.
///
/// Bands come in blue, green, red order and each pixel goes out as red, green, blue.
/// All three must hold exactly `dims.pixel_count()` bytes.
pub fn assemble_rgb(dims: Dimensions, blue: &[u8], green: &[u8], red: &[u8]) -> Result<RgbRaster> {
    let expected = dims.pixel_count();
    for (name, band) in [("blue", blue), ("green", green), ("red", red)] {
        if band.len() != expected {
            return Err(ConversionError::SizeMismatch {
                band: name.to_string(),
                expected,
                actual: band.len(),
            });
        }
    }

    debug!("Interleaving {}x{} RGB raster", dims.cols(), dims.rows());

    let mut data = try_alloc::<u8>(expected * RgbRaster::SAMPLES_PER_PIXEL, "RGB raster")?;
    for ((&b, &g), &r) in blue.iter().zip(green).zip(red) {
        data.extend_from_slice(&[r, g, b]);
    }

    Ok(RgbRaster::from_parts(dims, data))
}
