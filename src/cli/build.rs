//! Build command: one emit event driven from the command line.

use std::fs;

use anyhow::{Context, Result, anyhow};

use crate::asset::scan_assets;
use crate::config::{MinifySetting, ProjectConfig};
use crate::envelope::{BuildOutput, Enveloper};
use crate::log;

use super::BuildArgs;

/// Scan the compiled assets, run one emit event, and write the published
/// envelope asset into the output directory.
pub fn run(config: &ProjectConfig, args: &BuildArgs) -> Result<()> {
    let assets_dir = args
        .assets
        .clone()
        .unwrap_or_else(|| config.build.assets.clone());
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.build.output.clone());

    let table = scan_assets(&assets_dir)?;
    log!("scan"; "{} compiled asset(s) in {}", table.len(), assets_dir.display());

    let public_path = config.build.resolved_public_path()?;

    let mut options = config.envelope.clone();
    if let Some(minify) = args.minify {
        options.minify = MinifySetting::Toggle(minify);
    }

    let enveloper = Enveloper::new(options);
    let mut output = BuildOutput::new(table, public_path);
    enveloper.emit(&mut output)?;

    let published = output
        .assets
        .get(enveloper.name())
        .ok_or_else(|| anyhow!("Envelope asset missing after emit"))?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory `{}`", output_dir.display()))?;
    let dest = output_dir.join(enveloper.name());
    fs::write(&dest, published.source())
        .with_context(|| format!("Failed to write `{}`", dest.display()))?;

    log!("envelope"; "wrote {} ({} bytes)", dest.display(), published.size());
    Ok(())
}
