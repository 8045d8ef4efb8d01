//! Template assembly: reference → raw text → rendered markup → minified.

mod error;
pub mod parser;
mod syntax;

pub use error::TemplateError;
pub use syntax::TemplateSyntax;

use std::fs;

use anyhow::Result;

use crate::asset::AssetTable;
use crate::minify::{self, MinifyOptions};
use crate::render::{PublicPath, Renderer};

use parser::Segment;

/// Turns an ordered sequence of template references into fully rendered,
/// minified strings, bound to one build-emit event.
///
/// A reference starting with the syntax's asset marker is loaded from the
/// asset table (sentinel stripped); anything else is read from disk as
/// UTF-8. Render blocks evaluate lazily: a template with no blocks never
/// touches the asset table.
pub struct Assembler<'a> {
    assets: &'a AssetTable,
    public_path: &'a PublicPath,
    syntax: &'a TemplateSyntax,
    minify: Option<&'a MinifyOptions>,
}

impl<'a> Assembler<'a> {
    pub fn new(
        assets: &'a AssetTable,
        public_path: &'a PublicPath,
        syntax: &'a TemplateSyntax,
        minify: Option<&'a MinifyOptions>,
    ) -> Self {
        Self {
            assets,
            public_path,
            syntax,
            minify,
        }
    }

    /// Assemble every reference, in order.
    ///
    /// The first failure aborts the whole assembly; there are no partial
    /// results to hand back for a broken envelope.
    pub fn assemble(&self, references: &[String]) -> Result<Vec<String>> {
        references
            .iter()
            .map(|reference| self.assemble_one(reference))
            .collect()
    }

    fn assemble_one(&self, reference: &str) -> Result<String> {
        let raw = self.load_template(reference)?;
        let rendered = self.render(&raw)?;
        self.minify(rendered)
    }

    /// Load one template's raw text, from the asset table or the filesystem.
    pub fn load_template(&self, reference: &str) -> Result<String, TemplateError> {
        if let Some(name) = self.syntax.strip_asset_marker(reference) {
            let asset = self.assets.get(name).ok_or_else(|| {
                TemplateError::load(reference, format!("no compiled asset named {name}"))
            })?;
            Ok(asset.source().to_string())
        } else {
            fs::read_to_string(reference).map_err(|err| TemplateError::load(reference, err))
        }
    }

    /// Substitute every render block in a template's raw text.
    ///
    /// A renderer is only constructed when a block is actually present.
    pub fn render(&self, raw: &str) -> Result<String, TemplateError> {
        let segments = parser::parse(raw, self.syntax)?;

        let mut out = String::with_capacity(raw.len());
        for segment in segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Block { mode, body } => {
                    let renderer = Renderer::new(mode, self.assets, self.public_path);
                    out.push_str(&renderer.render_one(body)?);
                }
            }
        }
        Ok(out)
    }

    /// Apply the resolved minification pass, if any.
    fn minify(&self, text: String) -> Result<String> {
        match self.minify {
            None => Ok(text),
            Some(options) => minify::minify(&text, options),
        }
    }
}
