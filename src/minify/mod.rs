//! Rendered template minification.
//!
//! Whitespace and comment handling is done with a raw-text-aware walker:
//! `<script>` and `<style>` bodies are never collapsed, only (optionally)
//! minified through oxc for JavaScript and lightningcss for CSS.

use std::borrow::Cow;

use anyhow::{Result, anyhow};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use serde::{Deserialize, Serialize};

/// Minification option record, applied uniformly to every rendered template.
///
/// Field names follow the external camelCase contract (`collapseWhitespace`,
/// `minifyJs`, ...). All options default to off; the canonical enabled set
/// is [`MinifyOptions::conservative`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinifyOptions {
    /// Collapse whitespace runs outside script/style elements.
    pub collapse_whitespace: bool,
    /// Always collapse to one space instead of removing runs entirely.
    pub conservative_collapse: bool,
    /// Strip `<!-- ... -->` comments outside script/style elements.
    pub remove_comments: bool,
    /// Minify inline `<script>` bodies with oxc.
    pub minify_js: bool,
    /// Minify inline `<style>` bodies with lightningcss.
    pub minify_css: bool,
}

impl MinifyOptions {
    /// The canonical option set used when minification is enabled with no
    /// explicit options: collapse whitespace, conservatively.
    pub fn conservative() -> Self {
        Self {
            collapse_whitespace: true,
            conservative_collapse: true,
            ..Self::default()
        }
    }
}

/// Minify one rendered template.
///
/// Fails only when an enabled js/css pass cannot parse an inline body;
/// such failures are fatal for the template.
pub fn minify(source: &str, options: &MinifyOptions) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some((start, tag)) = find_raw_text_open(rest) {
        minify_markup(&rest[..start], options, &mut out);

        let after = &rest[start..];
        let Some(tag_end) = after.find('>') else {
            // Truncated open tag; nothing sensible left to do
            out.push_str(after);
            return Ok(out);
        };
        out.push_str(&after[..=tag_end]);

        let body_and_rest = &after[tag_end + 1..];
        let closing = format!("</{tag}>");
        let Some(body_end) = body_and_rest.find(&closing) else {
            out.push_str(body_and_rest);
            return Ok(out);
        };

        out.push_str(&minify_raw_text(tag, &body_and_rest[..body_end], options)?);
        out.push_str(&closing);
        rest = &body_and_rest[body_end + closing.len()..];
    }

    minify_markup(rest, options, &mut out);
    Ok(out)
}

/// Find the earliest `<script` or `<style` open tag.
fn find_raw_text_open(text: &str) -> Option<(usize, &'static str)> {
    let mut best: Option<(usize, &'static str)> = None;

    for tag in ["script", "style"] {
        let needle = format!("<{tag}");
        let mut from = 0;
        while let Some(found) = text[from..].find(&needle) {
            let idx = from + found;
            let next = text[idx + needle.len()..].chars().next();
            // Must be a complete tag name, not a prefix of a longer one
            if matches!(next, Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/') {
                if best.is_none_or(|(b, _)| idx < b) {
                    best = Some((idx, tag));
                }
                break;
            }
            from = idx + needle.len();
        }
    }

    best
}

/// Minify a stretch of ordinary markup (no raw-text elements inside).
fn minify_markup(text: &str, options: &MinifyOptions, out: &mut String) {
    let text = if options.remove_comments {
        strip_comments(text)
    } else {
        Cow::Borrowed(text)
    };

    if options.collapse_whitespace {
        collapse_whitespace(&text, options.conservative_collapse, out);
    } else {
        out.push_str(&text);
    }
}

/// Strip `<!-- ... -->` comments. An unterminated comment runs to the end.
fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains("<!--") {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        result.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => {
                rest = "";
                break;
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

/// Collapse whitespace runs.
///
/// Conservative mode always leaves exactly one space. Otherwise runs
/// between tags (`>` ... `<`) and at the edges are removed entirely.
fn collapse_whitespace(text: &str, conservative: bool, out: &mut String) {
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_whitespace() {
            out.push(c);
            continue;
        }

        while chars.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            chars.next();
        }

        if conservative {
            out.push(' ');
            continue;
        }

        let between_tags = out.ends_with('>') && chars.peek() == Some(&'<');
        let at_edge = out.is_empty() || chars.peek().is_none();
        if !between_tags && !at_edge {
            out.push(' ');
        }
    }
}

/// Minify a raw-text element body according to the enabled passes.
fn minify_raw_text(tag: &'static str, body: &str, options: &MinifyOptions) -> Result<String> {
    if body.trim().is_empty() {
        return Ok(body.to_string());
    }

    match tag {
        "script" if options.minify_js => {
            minify_js(body).ok_or_else(|| anyhow!("Failed to minify inline script"))
        }
        "style" if options.minify_css => {
            minify_css(body).ok_or_else(|| anyhow!("Failed to minify inline stylesheet"))
        }
        _ => Ok(body.to_string()),
    }
}

/// Minify JavaScript source code.
fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}
