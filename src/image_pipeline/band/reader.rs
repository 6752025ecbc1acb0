use std::io::Read;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::band::types::{Band, BandBuffer, Dimensions};

pub trait BandReader {
    fn read_band(&self, band: Band, input: &mut dyn Read, dims: Dimensions) -> Result<BandBuffer>;
}
