use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn simple_source() {
    let buf = SourceBuffer::new("s(\"bd\")");
    assert_eq!(buf.len(), 7);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"s(\"bd\")");
}

#[test]
fn sentinel_follows_content() {
    let buf = SourceBuffer::new("bd sd");
    assert_eq!(buf.buf[5], 0);
}

// === Alignment ===

#[test]
fn buffer_is_cache_line_aligned() {
    for len in [0usize, 1, 62, 63, 64, 65, 127, 128, 200] {
        let source = "a".repeat(len);
        let buf = SourceBuffer::new(&source);
        let total = buf.buf.len();
        assert_eq!(total % CACHE_LINE, 0, "len {len} gives {total}");
        assert!(total >= len + LOOKAHEAD_PAD, "no room for lookahead at len {len}");
    }
}

#[test]
fn padding_is_zeroed() {
    let buf = SourceBuffer::new("note(\"c4\")");
    let tail = &buf.buf[buf.len() as usize..];
    assert!(tail.iter().all(|&b| b == 0));
}

// === Content ===

#[test]
fn interior_null_is_preserved() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
}

#[test]
fn multibyte_content_is_copied_verbatim() {
    let source = "s(\"bd ♪\")";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hh");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}
