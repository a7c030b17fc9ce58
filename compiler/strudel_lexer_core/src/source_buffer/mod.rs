//! Sentinel-terminated source buffer for cheap lookahead.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()` at or near the end of the
//! source, so the scanners never bounds-check their one-byte lookahead.
//!
//! Null bytes are legal inside highlighted code. The cursor tells an
//! interior `0x00` apart from the sentinel by position, never by value.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel byte plus the byte `peek()` reads past it when called at EOF.
const LOOKAHEAD_PAD: usize = 2;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes for scanning purposes; offsets are `u32` throughout.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let len = source_len as usize;

        // Round up to next 64-byte boundary (minimum: source + sentinel +
        // one zero byte, so `peek()` at EOF stays in bounds).
        let padded_len = (len + LOOKAHEAD_PAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len];
        buf[..len].copy_from_slice(&source_bytes[..len]);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
