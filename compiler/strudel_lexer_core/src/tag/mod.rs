//! Token tags and the token record shared by both scanners.
//!
//! Discriminants are grouped by semantic range:
//!
//! | Range   | Group                                         |
//! |---------|-----------------------------------------------|
//! | 0-15    | Host code (comments, templates, names, parens) |
//! | 16-31   | Pattern notation (also used outside strings)  |
//! | 32-47   | String delimiters and untagged text           |
//! | 255     | End of input                                  |

use crate::Span;

/// Classification of one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Tag {
    // === Host code ===
    /// `// ...` or `/* ... */`, unterminated block comments included.
    Comment = 0,
    /// A back-quoted literal, rendered as one opaque span.
    Template = 1,
    /// A run of digits and `.` starting at a digit.
    Number = 2,
    /// `.name` where `name` is a known pattern function.
    Method = 3,
    /// A known pattern function called by bare name.
    Function = 4,
    /// `true`, `false`, `null`, `undefined`.
    Keyword = 5,
    /// `(` or `)`.
    Paren = 6,
    /// Host operators `+ - = &`.
    Op = 7,

    // === Pattern notation ===
    /// `[ ] { } < >`
    Bracket = 16,
    /// `* / @ ! ?`
    Operator = 17,
    /// `~`
    Rest = 18,
    /// `|`
    Alt = 19,
    /// `,`
    Comma = 20,
    /// A pitch such as `c4`, `d#5`, `eb3`.
    Note = 21,
    /// Any other word inside a pattern string: sample names, identifiers.
    Sample = 22,

    // === Delimiters and plain text ===
    /// Opening or closing quote of a `'` or `"` literal.
    Quote = 32,
    /// Untagged text: whitespace, unknown names, anything else.
    Plain = 33,

    /// End of input. Always zero-length.
    Eof = 255,
}

impl Tag {
    /// Stable lowercase name, used in token listings.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Comment => "comment",
            Tag::Template => "template",
            Tag::Number => "number",
            Tag::Method => "method",
            Tag::Function => "function",
            Tag::Keyword => "keyword",
            Tag::Paren => "paren",
            Tag::Op => "op",
            Tag::Bracket => "bracket",
            Tag::Operator => "operator",
            Tag::Rest => "rest",
            Tag::Alt => "alt",
            Tag::Comma => "comma",
            Tag::Note => "note",
            Tag::Sample => "sample",
            Tag::Quote => "quote",
            Tag::Plain => "plain",
            Tag::Eof => "eof",
        }
    }

    /// Single-byte pattern-notation punctuation shared by both scanners.
    ///
    /// `[ ] { } < >` are brackets, `* / @ ! ?` operators, then rest,
    /// alternation and comma.
    #[inline]
    pub const fn pattern_punct(byte: u8) -> Option<Tag> {
        match byte {
            b'[' | b']' | b'{' | b'}' | b'<' | b'>' => Some(Tag::Bracket),
            b'*' | b'/' | b'@' | b'!' | b'?' => Some(Tag::Operator),
            b'~' => Some(Tag::Rest),
            b'|' => Some(Tag::Alt),
            b',' => Some(Tag::Comma),
            _ => None,
        }
    }
}

/// A classified span of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub tag: Tag,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(tag: Tag, start: u32, end: u32) -> Self {
        Token {
            tag,
            span: Span::new(start, end),
        }
    }

    /// The zero-length end-of-input token at `pos`.
    #[inline]
    pub const fn eof(pos: u32) -> Self {
        Token::new(Tag::Eof, pos, pos)
    }

    /// The token's text in `source`, or `""` if the span does not fit it.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}
