//! Asset kind definitions.

/// Kind of embeddable asset, keyed by file extension.
///
/// This is the closed set of asset types the renderers know how to emit
/// markup for. Anything else is rejected with `UnsupportedAssetType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// JavaScript (`.js`)
    Js,
    /// Stylesheet (`.css`)
    Css,
}

impl AssetKind {
    /// Map a file extension (without the dot) to an asset kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" => Some(Self::Js),
            "css" => Some(Self::Css),
            _ => None,
        }
    }
}
