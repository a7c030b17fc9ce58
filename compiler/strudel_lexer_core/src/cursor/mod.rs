//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is reached
//! when the position hits the end of the visible region (`source_len`).
//! The sentinel (`0x00`) and cache-line padding after the source make
//! `peek()` safe at any position without bounds checks.
//!
//! # Windows
//!
//! [`Cursor::window`] narrows the visible region to a sub-range of the
//! same buffer. The mini-notation scanner runs over the content of one
//! string literal this way, so its positions stay absolute with respect
//! to the full source. Inside a window, bytes past the window end are
//! real source bytes (typically the closing quote), not the sentinel, so
//! every run-eating method is bounded by the window end as well.

/// Byte cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap lookahead snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// End of the visible region. Equals the source length unless windowed.
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel), followed by zero padding.
    /// This is guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// A cursor over `start..end` of the same buffer, positioned at `start`.
    ///
    /// `end` is clamped to this cursor's visible region and `start` to `end`.
    pub fn window(&self, start: u32, end: u32) -> Cursor<'a> {
        let end = end.min(self.source_len);
        Cursor {
            buf: self.buf,
            pos: start.min(end),
            source_len: end,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at the end of an unwindowed source. Interior null bytes
    /// also return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any in-source position: the sentinel and cache-line
    /// padding guarantee valid reads beyond the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte just before the current position, or `0x00` at
    /// the start of the buffer.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos {
            0 => 0,
            p => self.buf[p as usize - 1],
        }
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` if the cursor has reached the end of its region.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the buffer.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes in `start..end`.
    pub fn slice_bytes(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds region end {}",
            self.source_len
        );
        &self.buf[start as usize..end as usize]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_bytes_from(&self, start: u32) -> &'a [u8] {
        self.slice_bytes(start, self.pos)
    }

    /// Unread bytes of the visible region.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Advance while `pred` returns `true` for the current byte, never past
    /// the end of the visible region.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Clamped to the visible region, so a window never ends up split
    /// mid-character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance to the next `\n` byte or EOF.
    ///
    /// Used by the line comment scanner. The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        if let Some(offset) = memchr::memchr(b'\n', self.remaining()) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past the next `*/`, or to EOF when there is none.
    ///
    /// The search starts at the current position, so a `*` already under
    /// the cursor can close the comment.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_past_block_comment_end(&mut self) {
        if let Some(offset) = memchr::memmem::find(self.remaining(), b"*/") {
            self.pos += offset as u32 + 2;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next `quote` or `\`.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Newlines are ordinary content: quoted strings may span lines.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        if let Some(offset) = memchr::memchr2(quote, b'\\', self.remaining()) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// The cursor is positioned at the found byte, or at EOF if the byte was
    /// not found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) {
        match memchr::memchr(byte, self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }
}

#[cfg(test)]
mod tests;
