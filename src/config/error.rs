//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// The configured publicPath is neither a string nor (library-side) a
    /// function. Raised at validation time so a bad shape fails fast,
    /// before any template renders.
    #[error("Unsupported publicPath of type {0}")]
    UnsupportedPublicPathType(&'static str),
}
