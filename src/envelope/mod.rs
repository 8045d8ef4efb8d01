//! Envelope construction: three template groups in, one JSON asset out.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::asset::{AssetTable, BuildAsset};
use crate::config::EnvelopeOptions;
use crate::minify::MinifyOptions;
use crate::render::PublicPath;
use crate::template::{Assembler, TemplateSyntax};

/// The host boundary for one build-emit event.
///
/// Owns the compiled asset table and the host's configured public path.
/// The table is read-only while templates render; the single mutation is
/// the envelope asset registered by [`Enveloper::emit`].
#[derive(Debug)]
pub struct BuildOutput {
    pub assets: AssetTable,
    pub public_path: Option<PublicPath>,
}

impl BuildOutput {
    pub fn new(assets: AssetTable, public_path: Option<PublicPath>) -> Self {
        Self {
            assets,
            public_path,
        }
    }
}

/// The serialized envelope document.
///
/// Key order is part of the output contract: `head`, `bodyInline`,
/// `bodyLast`, nothing else. All three fields are always present, even
/// when their source groups are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Rendered head templates, one entry per template.
    pub head: Vec<String>,
    /// Rendered inline-body templates, stitched into a single block.
    pub body_inline: String,
    /// Rendered trailing-body templates, one entry per template.
    pub body_last: Vec<String>,
}

impl Envelope {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize envelope")
    }
}

/// Builds and publishes one envelope per build-emit event.
///
/// Stateless across invocations: everything is derived from the event's
/// asset table and public path, and discarded once serialized.
#[derive(Debug)]
pub struct Enveloper {
    name: String,
    head: Vec<String>,
    body_inline: Vec<String>,
    body_last: Vec<String>,
    minify: Option<MinifyOptions>,
    syntax: TemplateSyntax,
}

impl Enveloper {
    /// Construct from the option surface, resolving the minification
    /// setting once.
    pub fn new(options: EnvelopeOptions) -> Self {
        Self {
            name: options.name,
            head: options.head,
            body_inline: options.body_inline,
            body_last: options.body_last,
            minify: options.minify.resolve(),
            syntax: TemplateSyntax::default(),
        }
    }

    /// Override the template syntax contract (delimiters, asset marker).
    pub fn with_syntax(mut self, syntax: TemplateSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Name of the published envelope asset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run one full emit event: compute the effective public path,
    /// assemble the three groups, serialize, publish.
    pub fn emit(&self, output: &mut BuildOutput) -> Result<()> {
        let default_path = PublicPath::default();
        let public_path = output.public_path.as_ref().unwrap_or(&default_path);

        let envelope_json = self.build_envelope(&output.assets, public_path)?;
        self.publish(&mut output.assets, envelope_json);
        Ok(())
    }

    /// Assemble all three template groups and serialize them.
    pub fn build_envelope(
        &self,
        assets: &AssetTable,
        public_path: &PublicPath,
    ) -> Result<String> {
        let assembler = Assembler::new(assets, public_path, &self.syntax, self.minify.as_ref());

        let envelope = Envelope {
            head: assembler.assemble(&self.head)?,
            body_inline: assembler.assemble(&self.body_inline)?.join(""),
            body_last: assembler.assemble(&self.body_last)?,
        };
        envelope.to_json()
    }

    /// Register the serialized envelope as a new named output asset.
    fn publish(&self, assets: &mut AssetTable, envelope_json: String) {
        assets.insert(self.name.clone(), BuildAsset::new(envelope_json));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MinifySetting;

    fn assets() -> AssetTable {
        [
            (
                "index.js".to_string(),
                BuildAsset::new("console.log(\"test\")"),
            ),
            (
                "style.css".to_string(),
                BuildAsset::new(".class { color: #000 }"),
            ),
            (
                "head.tpl".to_string(),
                BuildAsset::new("{<#reference>}style.css{</reference>}"),
            ),
            (
                "body.tpl".to_string(),
                BuildAsset::new("{<#inline>}index.js{</inline>}"),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_envelope_serializes_with_stable_key_order() {
        let envelope = Envelope {
            head: vec!["head".to_string()],
            body_inline: "body inline".to_string(),
            body_last: vec!["body last".to_string()],
        };
        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"head":["head"],"bodyInline":"body inline","bodyLast":["body last"]}"#
        );
    }

    #[test]
    fn test_empty_groups_still_serialize_all_fields() {
        let enveloper = Enveloper::new(EnvelopeOptions::default());
        let json = enveloper
            .build_envelope(&assets(), &PublicPath::default())
            .unwrap();
        assert_eq!(json, r#"{"head":[],"bodyInline":"","bodyLast":[]}"#);
    }

    #[test]
    fn test_emit_publishes_named_asset() {
        let options = EnvelopeOptions {
            head: vec!["_head.tpl".to_string()],
            body_inline: vec!["_body.tpl".to_string(), "_body.tpl".to_string()],
            body_last: vec!["_head.tpl".to_string()],
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options);
        let mut output = BuildOutput::new(assets(), Some(PublicPath::fixed("")));

        let before = output.assets.len();
        enveloper.emit(&mut output).unwrap();
        assert_eq!(output.assets.len(), before + 1);

        let published = output.assets.get("envelope.json").unwrap();
        let expected = concat!(
            r#"{"head":["<link rel=\"stylesheet\" href=\"style.css\"/>"],"#,
            r#""bodyInline":"<script type=\"text/javascript\">console.log(\"test\")</script>"#,
            r#"<script type=\"text/javascript\">console.log(\"test\")</script>","#,
            r#""bodyLast":["<link rel=\"stylesheet\" href=\"style.css\"/>"]}"#
        );
        assert_eq!(published.source(), expected);
        assert_eq!(published.size(), expected.len());
    }

    #[test]
    fn test_emit_defaults_public_path_to_root() {
        let options = EnvelopeOptions {
            head: vec!["_head.tpl".to_string()],
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options);
        let mut output = BuildOutput::new(assets(), None);

        enveloper.emit(&mut output).unwrap();
        let published = output.assets.get("envelope.json").unwrap();
        assert!(published
            .source()
            .contains(r#"href=\"/style.css\""#));
    }

    #[test]
    fn test_emit_uses_configured_public_path() {
        let options = EnvelopeOptions {
            head: vec!["_head.tpl".to_string()],
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options);
        let mut output = BuildOutput::new(
            assets(),
            Some(PublicPath::fixed("https://example.test/")),
        );

        enveloper.emit(&mut output).unwrap();
        let published = output.assets.get("envelope.json").unwrap();
        assert!(published
            .source()
            .contains(r#"href=\"https://example.test/style.css\""#));
    }

    #[test]
    fn test_emit_fails_on_missing_template() {
        let options = EnvelopeOptions {
            body_last: vec!["_missing.tpl".to_string()],
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options);
        let mut output = BuildOutput::new(assets(), None);

        let err = enveloper.emit(&mut output).unwrap_err();
        assert!(err.to_string().contains("_missing.tpl"));
        // Nothing was published
        assert!(!output.assets.contains("envelope.json"));
    }

    #[test]
    fn test_custom_output_name() {
        let options = EnvelopeOptions {
            name: "widget.json".to_string(),
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options);
        let mut output = BuildOutput::new(assets(), None);

        enveloper.emit(&mut output).unwrap();
        assert!(output.assets.contains("widget.json"));
        assert!(!output.assets.contains("envelope.json"));
    }

    #[test]
    fn test_minification_applies_to_rendered_templates() {
        let mut assets = assets();
        assets.insert(
            "spaced.tpl",
            BuildAsset::new("<p>a    b</p>\n<p>c</p>"),
        );
        let options = EnvelopeOptions {
            head: vec!["_spaced.tpl".to_string()],
            minify: MinifySetting::Toggle(true),
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options);
        let mut output = BuildOutput::new(assets, None);

        enveloper.emit(&mut output).unwrap();
        let published = output.assets.get("envelope.json").unwrap();
        assert!(published.source().contains("<p>a b</p> <p>c</p>"));
    }

    #[test]
    fn test_custom_syntax_round_trip() {
        let mut table = AssetTable::new();
        table.insert("main.js", BuildAsset::new("x()"));
        table.insert("tpl", BuildAsset::new("[%#inline%]main.js[%/inline%]"));

        let syntax = TemplateSyntax {
            open: "[%".to_string(),
            close: "%]".to_string(),
            asset_marker: '@',
        };
        let options = EnvelopeOptions {
            head: vec!["@tpl".to_string()],
            ..EnvelopeOptions::default()
        };
        let enveloper = Enveloper::new(options).with_syntax(syntax);
        let mut output = BuildOutput::new(table, None);

        enveloper.emit(&mut output).unwrap();
        let published = output.assets.get("envelope.json").unwrap();
        assert!(published
            .source()
            .contains(r#"<script type=\"text/javascript\">x()</script>"#));
    }
}
