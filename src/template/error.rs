//! Template loading, parsing, and rendering errors.

use thiserror::Error;

use crate::render::RenderError;

/// Errors produced while turning one template reference into markup.
///
/// All are fatal: a single bad template aborts the whole envelope build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The template source could not be loaded, from file or asset table.
    #[error("Could not load template {reference}: {cause}")]
    Load { reference: String, cause: String },

    /// A block marker names something other than `inline` or `reference`.
    #[error("Unknown template block {name}")]
    UnknownBlock { name: String },

    /// A block was opened but its closing marker never appeared.
    #[error("Unclosed {name} block, expected {expected}")]
    Unclosed { name: String, expected: String },

    /// An opening delimiter was not followed by a well-formed block marker.
    #[error("Malformed template marker near `{near}`")]
    Malformed { near: String },

    /// An asset named inside a block failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl TemplateError {
    /// Wrap an underlying load failure with the offending reference.
    pub fn load(reference: impl Into<String>, cause: impl ToString) -> Self {
        Self::Load {
            reference: reference.into(),
            cause: cause.to_string(),
        }
    }
}
