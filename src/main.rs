use std::process::ExitCode;

use clap::Parser;
use truecolor_tiff::cli::Cli;
use truecolor_tiff::image_pipeline::{Result, TrueColorPipeline};
use truecolor_tiff::logger;

use tracing::{error, info};

fn main() -> ExitCode {
    logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!("nrow = {}, ncol = {}", cli.rows, cli.cols);

    let config = cli.config()?;
    let dims = cli.dimensions()?;
    let pipeline = TrueColorPipeline::new(config)?;

    info!("Stretch: {}", pipeline.config().stretch.mode);
    info!("Byte order: {:?}", pipeline.config().byte_order);

    pipeline.convert_file(dims, cli.band_paths(), &cli.output)?;

    info!(output = %cli.output.display(), "Conversion successful!");
    Ok(())
}
