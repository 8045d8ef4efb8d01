//! Template syntax constants.

/// The externally visible marker contract for envelope templates.
///
/// Delimiters are deliberately not the usual double braces, so templates
/// can carry ordinary `{{ }}` content untouched. With the defaults, a
/// template inlines or references an asset like this:
///
/// ```text
/// {<#inline>}runtime.js{</inline>}
/// {<#reference>}style.css{</reference>}
/// ```
///
/// A template reference starting with the asset marker (`_`) is loaded
/// from the compiled asset table instead of the filesystem, which lets
/// generated assets serve as templates for later stages.
///
/// All three markers are configurable; changing them changes the contract
/// surfaced to template authors, so the defaults are the canonical choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSyntax {
    /// Opening delimiter for a block marker.
    pub open: String,
    /// Closing delimiter for a block marker.
    pub close: String,
    /// Leading character marking a template reference as an asset template.
    pub asset_marker: char,
}

impl TemplateSyntax {
    /// Strip the asset-template marker, if present.
    ///
    /// Returns the asset name to look up, or `None` for file templates.
    pub fn strip_asset_marker<'a>(&self, reference: &'a str) -> Option<&'a str> {
        reference.strip_prefix(self.asset_marker)
    }
}

impl Default for TemplateSyntax {
    fn default() -> Self {
        Self {
            open: "{<".to_string(),
            close: ">}".to_string(),
            asset_marker: '_',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let syntax = TemplateSyntax::default();
        assert_eq!(syntax.open, "{<");
        assert_eq!(syntax.close, ">}");
        assert_eq!(syntax.asset_marker, '_');
    }

    #[test]
    fn test_strip_asset_marker() {
        let syntax = TemplateSyntax::default();
        assert_eq!(
            syntax.strip_asset_marker("_head.tpl"),
            Some("head.tpl")
        );
        assert_eq!(syntax.strip_asset_marker("head.tpl"), None);
    }
}
