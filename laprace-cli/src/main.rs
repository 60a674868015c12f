//! ## laprace-cli
//! **Console front end for lap races**
//!
//! Collects the lap count and racer names (flags first, prompts for the
//! rest), runs the race and prints a scoreboard. Scenario files replay a
//! complete race description.

use clap::Parser;
use laprace_config::LapraceConfig;
use laprace_telemetry::RaceLogger;

mod commands;
mod error;
mod input;
mod registry;
mod scoreboard;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => LapraceConfig::load_from_path(path)?,
        None => LapraceConfig::load()?,
    };
    RaceLogger::init(&config.telemetry.log_level);

    commands::dispatch(cli, &config)
}
