//! Reference rendering: markup pointing at an asset's public URL.

use crate::asset::AssetKind;

/// Emit markup referencing a resolved public URL. Never embeds content.
pub(super) fn render(kind: AssetKind, url: &str) -> String {
    match kind {
        AssetKind::Js => format!("<script type=\"text/javascript\" src=\"{url}\"></script>"),
        AssetKind::Css => format!("<link rel=\"stylesheet\" href=\"{url}\"/>"),
    }
}
