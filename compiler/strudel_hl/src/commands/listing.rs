//! Plain-text listings for inspecting scanner output.

use std::fmt::Write;

use strudel_highlight::{Scan, StringLocation};

/// One line per token: `tag @ start..end "text"`.
pub fn list_tokens(source: &str, scan: &Scan) -> String {
    let mut out = String::new();
    for tok in &scan.tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<8} @ {} {:?}",
            tok.tag.name(),
            tok.span,
            tok.text(source)
        );
    }
    out
}

/// One line per string literal: span, content span, content text.
pub fn list_strings(source: &str, strings: &[StringLocation]) -> String {
    let mut out = String::new();
    for loc in strings {
        let content = source.get(loc.content_span().to_range()).unwrap_or_default();
        let _ = write!(out, "{} content {} {content:?}", loc.span(), loc.content_span());
        if !loc.is_terminated() {
            out.push_str(" (unterminated)");
        }
        out.push('\n');
    }
    out
}
