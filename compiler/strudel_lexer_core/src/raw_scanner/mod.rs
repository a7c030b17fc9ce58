//! Hand-written scanner for Strudel host code.
//!
//! A shallow lexer for the JavaScript-like code around patterns: it knows
//! comments, the three string forms, numbers, names and single-character
//! punctuation, and nothing about grammar. It is total over any text.
//!
//! # Design
//!
//! Dispatch is on the byte under the cursor, first match wins:
//!
//! 1. `//` line comment (to end of line), `/*` block comment (through `*/`
//!    or to EOF)
//! 2. `"` / `'` literals, whose content is handed to a [`MiniScanner`]
//! 3. `` ` `` template literals, one opaque token
//! 4. numbers, unless glued to a preceding letter or `_`
//! 5. `.name` method calls, known or plain
//! 6. identifiers: known functions, keywords, or plain
//! 7. single-byte pattern punctuation, parens and host operators
//! 8. anything else, one character at a time
//!
//! Quoted literals are the only multi-token construct. On the opening quote
//! the scanner looks ahead to the literal's end, records its
//! [`StringLocation`], and emits the opening quote. Following calls drain a
//! [`MiniScanner`] windowed over the content, then emit the closing quote
//! if there is one. Every other branch emits exactly one token.

use crate::cursor::Cursor;
use crate::known;
use crate::mini_scanner::MiniScanner;
use crate::tag::{Tag, Token};
use crate::{SourceBuffer, StringLocation};

/// A quoted literal whose content is still being scanned.
#[derive(Clone, Debug)]
struct OpenLiteral<'a> {
    mini: MiniScanner<'a>,
    /// Position of the closing quote, if the literal is terminated.
    closing: Option<u32>,
}

/// Pull scanner over a full source.
///
/// Produces one token at a time. Collects a [`StringLocation`] for every
/// quoted literal, in order of appearance.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    literal: Option<OpenLiteral<'a>>,
    strings: Vec<StringLocation>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            literal: None,
            strings: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `Tag::Eof` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> Token {
        if let Some(literal) = &mut self.literal {
            let tok = literal.mini.next_token();
            if tok.tag != Tag::Eof {
                return tok;
            }
            let closing = literal.closing;
            self.literal = None;
            if let Some(quote) = closing {
                // The outer cursor has been parked on the closing quote.
                self.cursor.advance();
                return Token::new(Tag::Quote, quote, quote + 1);
            }
        }

        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Token::eof(start);
        }
        match self.cursor.current() {
            b'/' => self.slash_or_comment(start),
            b'"' | b'\'' => self.string(start),
            b'`' => self.template(start),
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'(' | b')' => self.single(start, Tag::Paren),
            b'+' | b'-' | b'=' | b'&' => self.single(start, Tag::Op),
            b => match Tag::pattern_punct(b) {
                Some(tag) => self.single(start, tag),
                None => self.plain(start),
            },
        }
    }

    /// String literals seen so far, in order of appearance.
    pub fn strings(&self) -> &[StringLocation] {
        &self.strings
    }

    /// Consume the scanner, returning the collected string literals.
    pub fn into_strings(self) -> Vec<StringLocation> {
        self.strings
    }

    fn token_from(&self, tag: Tag, start: u32) -> Token {
        Token::new(tag, start, self.cursor.pos())
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> Token {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.token_from(Tag::Comment, start)
            }
            b'*' => {
                // The `*` of the opener may close the comment: `/*/` is whole.
                self.cursor.advance();
                self.cursor.eat_past_block_comment_end();
                self.token_from(Tag::Comment, start)
            }
            _ => self.single(start, Tag::Operator),
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> Token {
        let quote = self.cursor.current();
        self.cursor.advance();
        let content_start = self.cursor.pos();

        while self.cursor.skip_to_string_delim(quote) == b'\\' {
            self.cursor.advance(); // consume '\'
            if !self.cursor.is_eof() {
                // Escape unit: the backslash plus one whole character, verbatim.
                self.cursor.advance_char();
            }
        }

        let content_end = self.cursor.pos();
        let closing = (!self.cursor.is_eof()).then_some(content_end);
        let end = if closing.is_some() {
            content_end + 1
        } else {
            content_end
        };
        self.strings.push(StringLocation {
            start,
            end,
            content_start,
            content_end,
        });
        self.literal = Some(OpenLiteral {
            mini: MiniScanner::new(self.cursor.window(content_start, content_end), 0),
            closing,
        });
        Token::new(Tag::Quote, start, content_start)
    }

    fn template(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '`'
        self.cursor.eat_until(b'`');
        if !self.cursor.is_eof() {
            self.cursor.advance(); // closing '`'
        }
        self.token_from(Tag::Template, start)
    }

    fn number(&mut self, start: u32) -> Token {
        let prev = self.cursor.prev();
        if prev.is_ascii_alphabetic() || prev == b'_' {
            return self.plain(start);
        }
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
        self.token_from(Tag::Number, start)
    }

    // ─── Names ─────────────────────────────────────────────────────

    fn dot(&mut self, start: u32) -> Token {
        if !self.cursor.peek().is_ascii_alphabetic() {
            return self.plain(start);
        }
        self.cursor.advance(); // consume '.'
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let dotted = self.cursor.slice_bytes_from(start);
        let tag = if known::lookup_bytes(dotted, known::is_method) {
            Tag::Method
        } else {
            Tag::Plain
        };
        self.token_from(tag, start)
    }

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.advance(); // first byte already classified
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$');
        let word = self.cursor.slice_bytes_from(start);
        let tag = if known::lookup_bytes(word, known::is_function) {
            Tag::Function
        } else if known::lookup_bytes(word, known::is_keyword) {
            Tag::Keyword
        } else {
            Tag::Plain
        };
        self.token_from(tag, start)
    }

    // ─── Single characters ─────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: Tag) -> Token {
        self.cursor.advance();
        self.token_from(tag, start)
    }

    /// One whole character of untagged text.
    fn plain(&mut self, start: u32) -> Token {
        self.cursor.advance_char();
        self.token_from(Tag::Plain, start)
    }
}

/// Result of scanning a whole source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scan {
    /// Tokens in source order, tiling `0..source.len()`. No `Eof`.
    pub tokens: Vec<Token>,
    /// Every `'`/`"` literal, in order of appearance.
    pub strings: Vec<StringLocation>,
}

/// Scan a full source into tokens and string literal locations.
pub fn scan(source: &str) -> Scan {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == Tag::Eof {
            break;
        }
        tokens.push(tok);
    }
    Scan {
        tokens,
        strings: scanner.into_strings(),
    }
}
