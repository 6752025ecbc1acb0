use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RgbRaster;

pub trait TiffWriter {
    fn write_rgb_tiff(&self, raster: &RgbRaster, output: &mut dyn Write) -> Result<()>;
}
