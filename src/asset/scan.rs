//! Asset directory scanning (pure, read-only).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::debug;

use super::{AssetTable, BuildAsset};

/// Scan a compiled asset directory into an asset table.
///
/// Asset names are paths relative to `dir`, always slash-separated
/// (`js/main.js`), matching the names a bundler would report for its
/// output files. Files that are not valid UTF-8 are skipped: they can
/// never be inlined into a text envelope and referencing them is the
/// host document's business, not ours.
pub fn scan_assets(dir: &Path) -> Result<AssetTable> {
    let mut table = AssetTable::new();
    scan_recursive(&mut table, dir, dir)?;
    Ok(table)
}

fn scan_recursive(table: &mut AssetTable, dir: &Path, base: &Path) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read asset directory `{}`", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_recursive(table, &path, base)?;
            continue;
        }

        let rel = path.strip_prefix(base).unwrap_or(&path);
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        match fs::read_to_string(&path) {
            Ok(content) => table.insert(name, BuildAsset::new(content)),
            Err(_) => {
                debug!("scan"; "skipping non-text file {}", rel.display());
            }
        }
    }

    Ok(())
}
