//! CLI entry point for the mosaic generator

use clap::Parser;
use mosaicmaker::io::cli::{Cli, MosaicProcessor};
use mosaicmaker::io::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let processor = MosaicProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
