use tracing::{info, instrument, warn};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    common::timing::PipelineTimings,
    band::{Band, BandBuffer, BandReader, Dimensions, RawBandReader},
    raster::{assemble_rgb, RgbRaster},
    stretch::BandStretch,
    tiff::{TiffWriter, StandardTiffWriter, ConversionConfig},
};

/// Blue, green and red raw bands in, one stretched RGB TIFF out.
pub struct TrueColorPipeline<R: BandReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
    stretches: [BandStretch; 3],
}

impl TrueColorPipeline<RawBandReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Result<Self> {
        let reader = RawBandReader::new(config.byte_order);
        Self::with_custom(reader, StandardTiffWriter, config)
    }
}

impl<R: BandReader, W: TiffWriter> TrueColorPipeline<R, W> {
    /// Fails with `InvalidConfig` on unusable thresholds unless validation is turned off.
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Result<Self> {
        if config.validate_thresholds {
            config.stretch.validate()?;
        } else if let Err(e) = config.stretch.validate() {
            warn!("Threshold validation disabled, continuing anyway: {}", e);
        }

        let stretch = config.stretch;
        let stretches = Band::ALL.map(|band| BandStretch::new(stretch.mode, stretch.thresholds_for(band)));

        Ok(Self {
            reader,
            writer,
            config,
            stretches,
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn stretch_for(&self, band: Band) -> &BandStretch {
        &self.stretches[band.index()]
    }

    fn read_bands(
        &self,
        dims: Dimensions,
        inputs: [&mut dyn Read; 3],
        timings: &mut PipelineTimings,
    ) -> Result<[BandBuffer; 3]> {
        let [blue, green, red] = inputs;
        Ok([
            self.read_band(Band::Blue, blue, dims, timings)?,
            self.read_band(Band::Green, green, dims, timings)?,
            self.read_band(Band::Red, red, dims, timings)?,
        ])
    }

    fn read_band(
        &self,
        band: Band,
        input: &mut dyn Read,
        dims: Dimensions,
        timings: &mut PipelineTimings,
    ) -> Result<BandBuffer> {
        let _span = tracing::info_span!("read_band", band = %band).entered();
        timings.time("read_band", || self.reader.read_band(band, input, dims))
    }

    /// Stretches the bands (blue, green, red) and interleaves them into an RGB raster.
    pub fn render(&self, dims: Dimensions, bands: &[BandBuffer; 3]) -> Result<RgbRaster> {
        self.render_timed(dims, bands, &mut PipelineTimings::new())
    }

    fn render_timed(
        &self,
        dims: Dimensions,
        bands: &[BandBuffer; 3],
        timings: &mut PipelineTimings,
    ) -> Result<RgbRaster> {
        let stretched = {
            let _span = tracing::info_span!("stretch", mode = %self.config.stretch.mode).entered();
            timings.time("stretch", || -> Result<Vec<Vec<u8>>> {
                Band::ALL
                    .iter()
                    .zip(bands)
                    .map(|(&band, buffer)| {
                        if buffer.len() != dims.pixel_count() {
                            return Err(ConversionError::SizeMismatch {
                                band: band.name().to_string(),
                                expected: dims.pixel_count(),
                                actual: buffer.len(),
                            });
                        }
                        self.stretch_for(band).apply_band(buffer)
                    })
                    .collect()
            })?
        };

        let _span = tracing::info_span!("assemble").entered();
        timings.time("assemble", || {
            assemble_rgb(dims, &stretched[0], &stretched[1], &stretched[2])
        })
    }

    fn encode(&self, raster: &RgbRaster, output: &mut dyn Write, timings: &mut PipelineTimings) -> Result<()> {
        let _span = tracing::info_span!("encode_tiff").entered();
        timings.time("encode_tiff", || self.writer.write_rgb_tiff(raster, output))
    }

    #[instrument(skip(self, inputs, output), fields(rows = dims.rows(), cols = dims.cols()))]
    pub fn convert(&self, dims: Dimensions, inputs: [&mut dyn Read; 3], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(dims, inputs, output).map(|_| ())
    }

    pub fn convert_with_timings(
        &self,
        dims: Dimensions,
        inputs: [&mut dyn Read; 3],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting true color conversion ({} stretch)", self.config.stretch.mode);

        let bands = self.read_bands(dims, inputs, &mut timings)?;
        let raster = self.render_timed(dims, &bands, &mut timings)?;
        drop(bands);
        self.encode(&raster, output, &mut timings)?;

        info!(
            "Conversion complete: {}x{} in {:.3}ms",
            raster.width(),
            raster.height(),
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Converts band files to a TIFF file. Every band is read before the output is
    /// created, so input errors never leave a file behind.
    #[instrument(skip(self, band_paths, output_path), fields(rows = dims.rows(), cols = dims.cols()))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        dims: Dimensions,
        band_paths: [P; 3],
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let output_path = output_path.as_ref();
        let mut timings = PipelineTimings::new();

        let [blue, green, red] = band_paths.each_ref().map(<P as AsRef<Path>>::as_ref);
        info!(
            blue = %blue.display(),
            green = %green.display(),
            red = %red.display(),
            output = %output_path.display(),
            "Converting files"
        );

        let mut files = {
            let _span = tracing::info_span!("open_input_files").entered();
            [open_input(blue)?, open_input(green)?, open_input(red)?]
        };
        let [b, g, r] = &mut files;
        let inputs: [&mut dyn Read; 3] = [b, g, r];
        let bands = self.read_bands(dims, inputs, &mut timings)?;
        drop(files);

        let raster = self.render_timed(dims, &bands, &mut timings)?;
        drop(bands);

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.encode(&raster, &mut output_file, &mut timings)?;

        timings.log_summary();
        Ok(timings)
    }
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        ConversionError::InputReadError(format!("Cannot open {} for read: {}", path.display(), e))
    })
}
