//! Markup escaping for source text.
//!
//! Exactly three substitutions: `&` to `&amp;`, `<` to `&lt;`, `>` to
//! `&gt;`. Quotes are left alone: highlighted text only ever lands in
//! element content, never inside attribute values.

use std::borrow::Cow;

/// Escape `text` for use as element content.
///
/// Borrows when there is nothing to escape, which is the common case for
/// names, numbers and whitespace.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if memchr::memchr3(b'&', b'<', b'>', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    push_escaped(&mut out, text);
    Cow::Owned(out)
}

/// Append `text` to `out`, escaped.
///
/// Single pass, so an `&` introduced by an entity is never escaped twice.
pub fn push_escaped(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut last = 0;
    for pos in memchr::memchr3_iter(b'&', b'<', b'>', bytes) {
        out.push_str(&text[last..pos]);
        out.push_str(match bytes[pos] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            _ => "&gt;",
        });
        last = pos + 1;
    }
    out.push_str(&text[last..]);
}
