//! Compiled asset model: kinds, the asset table, and directory scanning.

mod kind;
mod scan;
mod table;

pub use kind::AssetKind;
pub use scan::scan_assets;
pub use table::{AssetTable, BuildAsset};
