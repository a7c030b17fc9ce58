use super::Cursor;
use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn empty_source_is_eof_immediately() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

// === Peek / Prev ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek_past_the_end_reads_padding() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn prev_at_start_is_zero() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.prev(), 0);
    cursor.advance();
    assert_eq!(cursor.prev(), b'a');
}

// === Interior Null ===

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Runs ===

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("123.5abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn eat_while_stops_at_eof() {
    let buf = SourceBuffer::new("4444");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 4);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_with_always_true_predicate_stops_at_region_end() {
    let buf = SourceBuffer::new("xyz");
    let mut cursor = buf.cursor();
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 3);
}

// === UTF-8 ===

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_whole_character() {
    let source = "é♪🎵x";
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'x');
}

// === Delimiter Search ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("// hi\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_end_is_consumed() {
    let buf = SourceBuffer::new("/* a */b");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    cursor.eat_past_block_comment_end();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn block_comment_without_end_reaches_eof() {
    let buf = SourceBuffer::new("/* open");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    cursor.eat_past_block_comment_end();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote_or_backslash() {
    let buf = SourceBuffer::new("bd sd\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 5);

    let buf = SourceBuffer::new("a\\'b'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'\''), b'\\');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_ignores_other_quote() {
    let buf = SourceBuffer::new("it's");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_stops_at_byte_or_eof() {
    let buf = SourceBuffer::new("abc`def");
    let mut cursor = buf.cursor();
    cursor.eat_until(b'`');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'`');

    cursor.advance();
    cursor.eat_until(b'`');
    assert_eq!(cursor.pos(), 7);
    assert!(cursor.is_eof());
}

// === Windows ===

#[test]
fn window_bounds_runs() {
    let buf = SourceBuffer::new("\"c4 e4\"");
    let outer = buf.cursor();
    let mut inner = outer.window(1, 6);
    assert_eq!(inner.pos(), 1);
    inner.eat_while(|_| true);
    assert_eq!(inner.pos(), 6);
    assert!(inner.is_eof());
    // The byte past the window is the real closing quote, not the sentinel.
    assert_eq!(inner.current(), b'"');
}

#[test]
fn window_is_clamped_to_region() {
    let buf = SourceBuffer::new("abc");
    let inner = buf.cursor().window(5, 10);
    assert_eq!(inner.pos(), 3);
    assert!(inner.is_eof());
}

#[test]
fn slice_bytes_from_start() {
    let buf = SourceBuffer::new("lpf(800)");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_bytes_from(0), b"lpf");
}
