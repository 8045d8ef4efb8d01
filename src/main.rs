//! Enveloper - embed compiled build assets into host documents.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use enveloper::cli::{Cli, Commands, build};
use enveloper::config::ProjectConfig;
use enveloper::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Build { build_args } => build::run(&config, build_args),
    }
}
