//! Enveloper - embed compiled build assets into host documents.
//!
//! Given a table of compiled assets (scripts, stylesheets) and a small set of
//! user-supplied templates, enveloper renders each template through a custom
//! block syntax that either inlines an asset's full contents or emits a
//! reference (URL) to it, then packs the rendered groups into a single JSON
//! "envelope" asset the host document can consume.

pub mod asset;
pub mod cli;
pub mod config;
pub mod envelope;
pub mod logger;
pub mod minify;
pub mod render;
pub mod template;

pub use asset::{AssetKind, AssetTable, BuildAsset};
pub use config::{ConfigError, EnvelopeOptions, MinifySetting, ProjectConfig};
pub use envelope::{BuildOutput, Envelope, Enveloper};
pub use minify::MinifyOptions;
pub use render::{PublicPath, RenderError, RenderMode, Renderer};
pub use template::{Assembler, TemplateError, TemplateSyntax};
