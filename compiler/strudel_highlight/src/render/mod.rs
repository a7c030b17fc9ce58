//! Markup assembly from a token stream.
//!
//! A thin formatting step over the scanners' output:
//!
//! - styled tokens become `<span class="hl-*" data-start="S" data-end="E">`
//!   around their escaped text, with source-absolute byte offsets
//! - `Plain` and `Quote` tokens are emitted as escaped text only
//! - each `'`/`"` literal is wrapped in one `<span class="hl-string">`
//!   that opens at its opening quote and closes after the token ending at
//!   the literal's `end` (the closing quote, or the last content token of
//!   an unterminated literal)

use std::fmt::Write;

use strudel_lexer_core::{scan_mini, Scan, Tag, Token};

use crate::escape::push_escaped;

const STRING_OPEN: &str = r#"<span class="hl-string">"#;
const SPAN_CLOSE: &str = "</span>";

/// CSS class for a styled tag, `None` for text emitted bare.
pub const fn css_class(tag: Tag) -> Option<&'static str> {
    match tag {
        Tag::Comment => Some("hl-comment"),
        Tag::Template => Some("hl-string"),
        Tag::Number => Some("hl-number"),
        Tag::Method => Some("hl-method"),
        Tag::Function => Some("hl-function"),
        Tag::Keyword => Some("hl-keyword"),
        Tag::Paren => Some("hl-paren"),
        Tag::Op => Some("hl-op"),
        Tag::Bracket => Some("hl-bracket"),
        Tag::Operator => Some("hl-operator"),
        Tag::Rest => Some("hl-rest"),
        Tag::Alt => Some("hl-alt"),
        Tag::Comma => Some("hl-comma"),
        Tag::Note => Some("hl-note"),
        Tag::Sample => Some("hl-sample"),
        Tag::Quote | Tag::Plain | Tag::Eof => None,
    }
}

/// Render a scanned source to markup.
///
/// `scan` must come from scanning `source`; token text is sliced from it.
pub fn render(source: &str, scan: &Scan) -> String {
    let mut out = String::with_capacity(source.len() * 4);
    let mut strings = scan.strings.iter().peekable();
    let mut open = None;

    for tok in &scan.tokens {
        if tok.tag == Tag::Quote && open.is_none() {
            open = strings.next_if(|loc| loc.start == tok.span.start);
            if open.is_some() {
                out.push_str(STRING_OPEN);
            }
        }
        push_token(&mut out, tok.text(source), tok, 0);
        if open.is_some_and(|loc| tok.span.end == loc.end) {
            out.push_str(SPAN_CLOSE);
            open = None;
        }
    }
    out
}

/// Render a bare mini-notation string whose first byte sits at `base` in
/// some larger source. `data-start`/`data-end` carry the shifted offsets.
///
/// Tokens are scanned at local offsets and `base` is added only when the
/// attributes are written, in `u64`, so no `base` can drop text.
pub fn render_mini(content: &str, base: u32) -> String {
    let mut out = String::with_capacity(content.len() * 4);
    for tok in scan_mini(content, 0) {
        push_token(&mut out, tok.text(content), &tok, base);
    }
    out
}

/// Append one token. Attribute offsets are `base + span`.
fn push_token(out: &mut String, text: &str, tok: &Token, base: u32) {
    match css_class(tok.tag) {
        Some(class) => {
            let base = u64::from(base);
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                r#"<span class="{class}" data-start="{}" data-end="{}">"#,
                base + u64::from(tok.span.start),
                base + u64::from(tok.span.end)
            );
            push_escaped(out, text);
            out.push_str(SPAN_CLOSE);
        }
        None => push_escaped(out, text),
    }
}
