/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for orbital-sampler

use clap::Parser;
use orbital_sampler::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Cli::parse();
    log::debug!("orbital-sampler v{} running {:?}", orbital_sampler::VERSION, args.command);

    let report = cli::run(&args)?;
    cli::write_report(&args, &report)?;

    Ok(())
}
