//! Public path: asset name → public-facing URL.

use std::fmt;

/// How an asset name becomes a public-facing URL.
///
/// Exactly two shapes are supported: a fixed string prefix prepended
/// verbatim to the asset name, or a function computing the full URL from
/// the name. Any other configuration shape is rejected at validation time
/// (see `ConfigError::UnsupportedPublicPathType`), never at resolve time.
///
/// No trailing-slash normalization is performed; callers supply exactly
/// the prefix they want applied.
pub enum PublicPath {
    /// Fixed prefix, concatenated in front of the asset name.
    Fixed(String),
    /// Full URL computed from the asset name.
    Dynamic(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl PublicPath {
    pub fn fixed(prefix: impl Into<String>) -> Self {
        Self::Fixed(prefix.into())
    }

    pub fn dynamic(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Dynamic(Box::new(f))
    }

    /// Resolve an asset name to its public URL.
    pub fn resolve(&self, asset_name: &str) -> String {
        match self {
            Self::Fixed(prefix) => format!("{prefix}{asset_name}"),
            Self::Dynamic(f) => f(asset_name),
        }
    }
}

impl Default for PublicPath {
    /// The effective public path when the host configures none.
    fn default() -> Self {
        Self::Fixed("/".to_string())
    }
}

impl fmt::Debug for PublicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(prefix) => f.debug_tuple("Fixed").field(prefix).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<fn>").finish(),
        }
    }
}
