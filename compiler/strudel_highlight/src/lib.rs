//! Syntax highlighting for Strudel pattern code.
//!
//! Turns a full Strudel source (JavaScript-like host code with quoted
//! mini-notation patterns) into markup, plus a table of where every quoted
//! literal sits. Scanning lives in `strudel_lexer_core`; this crate escapes,
//! assembles spans and maps positions.
//!
//! ```
//! use strudel_highlight::highlight_strudel_with_meta;
//!
//! let result = highlight_strudel_with_meta(r#"note("c4 ~ e4")"#);
//! assert!(result.html.contains(r#"<span class="hl-rest" data-start="9" data-end="10">~</span>"#));
//! assert_eq!(result.strings[0].content_start, 6);
//! assert_eq!(result.string_at(7).map(|loc| loc.start), Some(5));
//! ```
//!
//! All entry points are total: any input produces output, and removing the
//! tags from that output and unescaping `&lt;`, `&gt;`, `&amp;` gives back
//! the input exactly.

mod escape;
mod render;

pub use escape::{escape_html, push_escaped};
pub use render::{css_class, render, render_mini};
pub use strudel_lexer_core::{scan, Scan, Span, StringLocation, Tag, Token};

/// Rendered markup plus the location of every `'`/`"` literal.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightResult {
    pub html: String,
    /// In order of appearance; non-overlapping.
    pub strings: Vec<StringLocation>,
}

impl HighlightResult {
    /// The literal whose `[start, end)` contains `offset`, if any.
    pub fn string_at(&self, offset: u32) -> Option<&StringLocation> {
        let idx = self.strings.partition_point(|loc| loc.end <= offset);
        self.strings
            .get(idx)
            .filter(|loc| loc.span().contains(offset))
    }
}

/// Highlight a full Strudel source to markup.
pub fn highlight_strudel(code: &str) -> String {
    highlight_strudel_with_meta(code).html
}

/// Highlight a full Strudel source, keeping the string literal table.
#[tracing::instrument(level = "trace", skip_all, fields(len = code.len()))]
pub fn highlight_strudel_with_meta(code: &str) -> HighlightResult {
    let scan = scan(code);
    tracing::debug!(
        tokens = scan.tokens.len(),
        strings = scan.strings.len(),
        "scanned source"
    );
    let html = render(code, &scan);
    HighlightResult {
        html,
        strings: scan.strings,
    }
}

/// Highlight a bare mini-notation string.
///
/// `base` is the offset of the string's first byte in some enclosing
/// source; every `data-start`/`data-end` is shifted by it.
#[tracing::instrument(level = "trace", skip_all, fields(len = content.len(), base = base))]
pub fn highlight_mininotation(content: &str, base: u32) -> String {
    render_mini(content, base)
}
