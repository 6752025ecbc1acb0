use std::io::Write;
use tracing::debug;
use tiff::encoder::{colortype, Compression, TiffEncoder};
use tiff::tags::{PlanarConfiguration, Tag};
use crate::image_pipeline::common::error::{try_alloc, Result, ConversionError};
use crate::image_pipeline::raster::RgbRaster;
use crate::image_pipeline::tiff::writer::TiffWriter;

/// Room for the header and IFD on top of the pixel data.
const HEADER_RESERVE: usize = 1024;

/// Writes baseline RGB TIFFs: 8 bits per sample, chunky, uncompressed, one strip.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_rgb_tiff(&self, raster: &RgbRaster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", raster.width(), raster.height());

        let width = u32::try_from(raster.width())
            .map_err(|_| ConversionError::InvalidDimensions(raster.height(), raster.width()))?;
        let height = u32::try_from(raster.height())
            .map_err(|_| ConversionError::InvalidDimensions(raster.height(), raster.width()))?;

        let mut buffer = try_alloc::<u8>(raster.data().len() + HEADER_RESERVE, "TIFF output buffer")?;

        {
            let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?
                .with_compression(Compression::Uncompressed);

            let mut image = encoder
                .new_image::<colortype::RGB8>(width, height)
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

            // whole raster in a single strip
            image
                .rows_per_strip(height)
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
            image
                .encoder()
                .write_tag(Tag::PlanarConfiguration, PlanarConfiguration::Chunky.to_u16())
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

            image
                .write_data(raster.data())
                .map_err(|e| ConversionError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;
        output.flush()?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
