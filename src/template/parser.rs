//! Dedicated parser for template block markers.
//!
//! Recognizes exactly two block forms, `inline` and `reference`, between
//! a configurable delimiter pair. Everything outside a block passes
//! through verbatim. This is all the dynamic behavior templates need, so
//! there is no general-purpose template language underneath.

use crate::render::RenderMode;

use super::{TemplateError, TemplateSyntax};

/// One parsed piece of a template.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, emitted unchanged.
    Text(&'a str),
    /// An `inline` or `reference` block; `body` is the trimmed asset name.
    Block { mode: RenderMode, body: &'a str },
}

/// How much surrounding text to quote in malformed-marker errors.
const ERROR_CONTEXT_LEN: usize = 24;

/// Split a template into literal text and render blocks.
///
/// A block is `OPEN#name CLOSE body OPEN/name CLOSE` with no nesting.
/// The body (an asset name) is trimmed of surrounding whitespace so
/// templates can format markers across lines.
pub fn parse<'a>(
    template: &'a str,
    syntax: &TemplateSyntax,
) -> Result<Vec<Segment<'a>>, TemplateError> {
    let open = syntax.open.as_str();
    let close = syntax.close.as_str();

    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(open) {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }

        let marker = &rest[start + open.len()..];
        let Some(marker) = marker.strip_prefix('#') else {
            return Err(TemplateError::Malformed {
                near: snippet(&rest[start..]),
            });
        };
        let Some(name_end) = marker.find(close) else {
            return Err(TemplateError::Malformed {
                near: snippet(&rest[start..]),
            });
        };

        let name = &marker[..name_end];
        let mode = RenderMode::from_block_name(name).ok_or_else(|| {
            TemplateError::UnknownBlock {
                name: name.to_string(),
            }
        })?;

        let body_and_rest = &marker[name_end + close.len()..];
        let closing = format!("{open}/{}{close}", mode.block_name());
        let Some(body_end) = body_and_rest.find(&closing) else {
            return Err(TemplateError::Unclosed {
                name: name.to_string(),
                expected: closing,
            });
        };

        segments.push(Segment::Block {
            mode,
            body: body_and_rest[..body_end].trim(),
        });
        rest = &body_and_rest[body_end + closing.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }

    Ok(segments)
}

/// First few characters of `text`, for error context.
fn snippet(text: &str) -> String {
    text.chars().take(ERROR_CONTEXT_LEN).collect()
}
