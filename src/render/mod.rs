//! Asset rendering: one asset name in, one piece of markup out.
//!
//! A [`Renderer`] is bound to the current build's asset table and public
//! path and carries its strategy as a value ([`RenderMode`]): `Inline`
//! embeds the asset's contents in the markup, `Reference` points at its
//! public URL. Dispatch is a total match over `(RenderMode, AssetKind)`,
//! so an unregistered extension is an explicit error, not a missing method.

mod error;
mod inline;
mod public_path;
mod reference;

pub use error::RenderError;
pub use public_path::PublicPath;

use crate::asset::{AssetKind, AssetTable};

/// Rendering strategy for an asset occurrence in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Embed the asset's full contents in the output markup.
    Inline,
    /// Emit markup referencing the asset's public URL.
    Reference,
}

impl RenderMode {
    /// Map a template block name to a render mode.
    pub fn from_block_name(name: &str) -> Option<Self> {
        match name {
            "inline" => Some(Self::Inline),
            "reference" => Some(Self::Reference),
            _ => None,
        }
    }

    /// The template block name for this mode.
    pub fn block_name(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Reference => "reference",
        }
    }
}

/// Renders single assets into markup, bound to one build-emit event.
///
/// Pure once constructed: the same inputs always produce the same markup.
pub struct Renderer<'a> {
    mode: RenderMode,
    assets: &'a AssetTable,
    public_path: &'a PublicPath,
}

impl<'a> Renderer<'a> {
    pub fn new(mode: RenderMode, assets: &'a AssetTable, public_path: &'a PublicPath) -> Self {
        Self {
            mode,
            assets,
            public_path,
        }
    }

    /// Render one named asset into its markup form.
    ///
    /// The extension (substring after the last `.`) selects the asset kind;
    /// an extension outside the registered set fails before the table is
    /// consulted, so a present-but-unsupported asset still reports its type.
    pub fn render_one(&self, asset_name: &str) -> Result<String, RenderError> {
        let extension = asset_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("");

        let kind = AssetKind::from_extension(extension)
            .ok_or_else(|| RenderError::UnsupportedAssetType(extension.to_string()))?;

        let asset = self
            .assets
            .get(asset_name)
            .ok_or_else(|| RenderError::AssetNotFound(asset_name.to_string()))?;

        let markup = match self.mode {
            RenderMode::Inline => inline::render(kind, asset.source()),
            RenderMode::Reference => {
                reference::render(kind, &self.public_path.resolve(asset_name))
            }
        };

        Ok(markup)
    }
}
