//! Rendering error types.

use thiserror::Error;

/// Errors produced while rendering a single asset occurrence.
///
/// All are fatal for the build; messages name the exact asset or
/// extension so the template author can fix the reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The named asset is absent from the compiled asset table.
    #[error("Could not find asset called {0}")]
    AssetNotFound(String),

    /// The asset's extension has no registered rendering strategy.
    #[error("Unsupported asset type {0}")]
    UnsupportedAssetType(String),
}
