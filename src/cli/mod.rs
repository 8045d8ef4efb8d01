//! Command-line interface definitions.

pub mod build;

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Enveloper CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: enveloper.toml)
    #[arg(short = 'C', long, default_value = "enveloper.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the envelope from compiled assets
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Compiled asset directory (overrides config)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub assets: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Minify rendered templates
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}
