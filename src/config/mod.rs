//! Project configuration for `enveloper.toml`.
//!
//! Two surfaces live here:
//! - [`EnvelopeOptions`] — the envelope construction options (`[envelope]`
//!   section, also the library constructor surface)
//! - [`ProjectConfig`] — the full driver config, adding the `[build]`
//!   section (asset directory, output directory, public path)
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[build]`    | Compiled asset dir, output dir, public path     |
//! | `[envelope]` | Output name, template groups, minification      |

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::log;
use crate::minify::MinifyOptions;
use crate::render::PublicPath;

// ============================================================================
// Envelope options
// ============================================================================

/// Constructor-time options for one enveloper, all optional.
///
/// Field names follow the external camelCase contract (`bodyInline`,
/// `bodyLast`) in config files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvelopeOptions {
    /// Output asset name.
    pub name: String,
    /// Template references for the head group.
    pub head: Vec<String>,
    /// Template references for the inline-body group.
    pub body_inline: Vec<String>,
    /// Template references for the trailing-body group.
    pub body_last: Vec<String>,
    /// Minification: `false`, `true`, or an explicit options table.
    pub minify: MinifySetting,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            name: "envelope.json".to_string(),
            head: Vec::new(),
            body_inline: Vec::new(),
            body_last: Vec::new(),
            minify: MinifySetting::default(),
        }
    }
}

/// The three accepted shapes of the `minify` option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MinifySetting {
    /// `false` disables minification; `true` enables the canonical set.
    Toggle(bool),
    /// An explicit options table, passed through verbatim.
    Options(MinifyOptions),
}

impl MinifySetting {
    /// Resolve to the effective option record, once, at construction.
    pub fn resolve(self) -> Option<MinifyOptions> {
        match self {
            Self::Toggle(false) => None,
            Self::Toggle(true) => Some(MinifyOptions::conservative()),
            Self::Options(options) => Some(options),
        }
    }
}

impl Default for MinifySetting {
    fn default() -> Self {
        Self::Toggle(false)
    }
}

// ============================================================================
// Driver config
// ============================================================================

/// `[build]` section: the host-side inputs of the driver.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory holding the compiled assets to envelope.
    pub assets: PathBuf,
    /// Directory the envelope asset is written to.
    pub output: PathBuf,
    /// Public path prefix; must be a string. Kept as a raw toml value so
    /// a wrong shape can be reported with its actual type.
    pub public_path: Option<toml::Value>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("dist"),
            output: PathBuf::from("public"),
            public_path: None,
        }
    }
}

impl BuildConfig {
    /// Validate the configured public path shape and resolve it.
    pub fn resolved_public_path(&self) -> Result<Option<PublicPath>, ConfigError> {
        match &self.public_path {
            None => Ok(None),
            Some(toml::Value::String(prefix)) => Ok(Some(PublicPath::fixed(prefix.clone()))),
            Some(other) => Err(ConfigError::UnsupportedPublicPathType(other.type_str())),
        }
    }
}

/// Root configuration structure representing enveloper.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Build inputs and outputs
    pub build: BuildConfig,
    /// Envelope construction options
    pub envelope: EnvelopeOptions,
}

impl ProjectConfig {
    /// Load configuration from a file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Fail fast on invalid shapes, before any template renders.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build.resolved_public_path()?;
        Ok(())
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = EnvelopeOptions::default();

        assert_eq!(options.name, "envelope.json");
        assert!(options.head.is_empty());
        assert!(options.body_inline.is_empty());
        assert!(options.body_last.is_empty());
        assert_eq!(options.minify.resolve(), None);
    }

    #[test]
    fn test_minify_disabled_by_default() {
        assert_eq!(MinifySetting::default().resolve(), None);
    }

    #[test]
    fn test_minify_true_uses_canonical_options() {
        assert_eq!(
            MinifySetting::Toggle(true).resolve(),
            Some(MinifyOptions {
                collapse_whitespace: true,
                conservative_collapse: true,
                remove_comments: false,
                minify_js: false,
                minify_css: false,
            })
        );
    }

    #[test]
    fn test_minify_explicit_options_pass_through() {
        let options = MinifyOptions {
            remove_comments: true,
            ..MinifyOptions::default()
        };
        assert_eq!(
            MinifySetting::Options(options.clone()).resolve(),
            Some(options)
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config = ProjectConfig::from_str(
            r#"
            [build]
            assets = "build/out"
            output = "site"
            public_path = "https://cdn.example.test/"

            [envelope]
            name = "widget.json"
            head = ["templates/head.html"]
            bodyInline = ["templates/body.html"]
            bodyLast = ["_trailer.tpl"]
            minify = true
            "#,
        )
        .unwrap();

        assert_eq!(config.build.assets, PathBuf::from("build/out"));
        assert_eq!(config.build.output, PathBuf::from("site"));
        assert_eq!(config.envelope.name, "widget.json");
        assert_eq!(config.envelope.head, vec!["templates/head.html"]);
        assert_eq!(config.envelope.body_inline, vec!["templates/body.html"]);
        assert_eq!(config.envelope.body_last, vec!["_trailer.tpl"]);
        assert_eq!(
            config.envelope.minify.resolve(),
            Some(MinifyOptions::conservative())
        );
    }

    #[test]
    fn test_parse_minify_options_table() {
        let config = ProjectConfig::from_str(
            r#"
            [envelope]
            minify = { collapseWhitespace = true, minifyJs = true }
            "#,
        )
        .unwrap();

        assert_eq!(
            config.envelope.minify.resolve(),
            Some(MinifyOptions {
                collapse_whitespace: true,
                minify_js: true,
                ..MinifyOptions::default()
            })
        );
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = ProjectConfig::from_str("").unwrap();
        assert_eq!(config.build.assets, PathBuf::from("dist"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.public_path.is_none());
        assert_eq!(config.envelope.name, "envelope.json");
    }

    #[test]
    fn test_string_public_path_resolves_fixed() {
        let config = ProjectConfig::from_str(
            r#"
            [build]
            public_path = "/static/"
            "#,
        )
        .unwrap();

        let resolved = config.build.resolved_public_path().unwrap().unwrap();
        assert_eq!(resolved.resolve("main.js"), "/static/main.js");
    }

    #[test]
    fn test_integer_public_path_is_rejected_with_type_name() {
        let config = ProjectConfig::from_str(
            r#"
            [build]
            public_path = 1
            "#,
        )
        .unwrap();

        let err = config.build.resolved_public_path().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported publicPath of type integer");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boolean_public_path_is_rejected_with_type_name() {
        let config = ProjectConfig::from_str(
            r#"
            [build]
            public_path = true
            "#,
        )
        .unwrap();

        let err = config.build.resolved_public_path().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported publicPath of type boolean");
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (_, ignored) = ProjectConfig::parse_with_ignored(
            r#"
            [build]
            assets = "dist"
            asets = "typo"

            [envelop]
            name = "x"
            "#,
        )
        .unwrap();

        assert!(ignored.contains(&"build.asets".to_string()));
        assert!(ignored.contains(&"envelop".to_string()));
    }
}
