//! Scanner for the mini-notation written inside pattern strings.
//!
//! Runs over the content of exactly one string literal, e.g. the
//! `bd [~ sd]*2, hh*8` in `s("bd [~ sd]*2, hh*8")`. Classification, first
//! match wins:
//!
//! 1. brackets `[ ] { } < >`, operators `* / @ ! ?`, rest `~`,
//!    alternation `|`, comma `,` (one byte each)
//! 2. numbers: digits and `.` starting at a digit
//! 3. words: `[a-zA-Z0-9#_:-]` starting at a letter, split into notes and
//!    sample names by [`is_note_name`]
//! 4. anything else, one character at a time, untagged
//!
//! Token spans are absolute: every position is offset by the scanner's
//! `base`, and when the scanner runs over a [`Cursor::window`] of the full
//! source, the window positions are already absolute and `base` is zero.

use crate::cursor::Cursor;
use crate::tag::{Tag, Token};
use crate::SourceBuffer;

/// Pull scanner over one mini-notation string.
#[derive(Clone, Debug)]
pub struct MiniScanner<'a> {
    cursor: Cursor<'a>,
    base: u32,
}

impl<'a> MiniScanner<'a> {
    /// Create a scanner whose token spans are shifted by `base`.
    pub fn new(cursor: Cursor<'a>, base: u32) -> Self {
        Self { cursor, base }
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `Tag::Eof` once the content is exhausted, and
    /// keeps returning it on subsequent calls.
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Token::eof(self.abs(start));
        }
        let tag = match self.cursor.current() {
            b'0'..=b'9' => self.number(),
            b'a'..=b'z' | b'A'..=b'Z' => self.word(start),
            b => match Tag::pattern_punct(b) {
                Some(tag) => {
                    self.cursor.advance();
                    tag
                }
                None => {
                    self.cursor.advance_char();
                    Tag::Plain
                }
            },
        };
        Token::new(tag, self.abs(start), self.abs(self.cursor.pos()))
    }

    #[inline]
    fn abs(&self, pos: u32) -> u32 {
        self.base.saturating_add(pos)
    }

    fn number(&mut self) -> Tag {
        self.cursor.eat_while(is_number_continue);
        Tag::Number
    }

    fn word(&mut self, start: u32) -> Tag {
        self.cursor.eat_while(is_word_continue);
        if is_note_name(self.cursor.slice_bytes_from(start)) {
            Tag::Note
        } else {
            Tag::Sample
        }
    }
}

/// Scan a bare mini-notation string into tokens, `Eof` excluded.
///
/// `base` is the absolute offset of `content` inside the full source, so
/// the returned spans index the full source rather than `content`.
/// Offsets saturate at `u32::MAX`; scan with `base == 0` to get spans that
/// always slice `content`.
pub fn scan_mini(content: &str, base: u32) -> Vec<Token> {
    let buf = SourceBuffer::new(content);
    let mut scanner = MiniScanner::new(buf.cursor(), base);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == Tag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Returns `true` if `word` reads as a pitch: one letter `a`-`g` (either
/// case), an optional `#` or `b`, an optional `-`, then exactly one digit.
///
/// `c4`, `d#5`, `eb3` and `a-1` are notes. `cs`, `bd`, `c10` are not.
/// A sample that happens to look like a pitch is still read as a note.
pub fn is_note_name(word: &[u8]) -> bool {
    let [letter, rest @ ..] = word else {
        return false;
    };
    if !matches!(letter.to_ascii_lowercase(), b'a'..=b'g') {
        return false;
    }
    let rest = match rest {
        [b'#' | b'b', tail @ ..] => tail,
        _ => rest,
    };
    let rest = match rest {
        [b'-', tail @ ..] => tail,
        _ => rest,
    };
    matches!(rest, [digit] if digit.is_ascii_digit())
}

#[inline]
fn is_number_continue(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

#[inline]
fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'#' | b'_' | b':' | b'-')
}
