//! Inline rendering: asset contents embedded in the markup.

use crate::asset::AssetKind;

/// Wrap asset contents in embedding markup.
///
/// Content is embedded verbatim, not escaped: compiled build output is
/// trusted to be safe to splice into the host document.
pub(super) fn render(kind: AssetKind, source: &str) -> String {
    match kind {
        AssetKind::Js => format!("<script type=\"text/javascript\">{source}</script>"),
        AssetKind::Css => format!("<style>{source}</style>"),
    }
}
