//! Boundaries of one `'` or `"` string literal.

use crate::Span;

/// Where a quoted literal sits in the source.
///
/// `start < content_start <= content_end <= end` always holds. For an
/// unterminated literal `end == content_end` (the source ended before a
/// closing quote, so none was consumed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct StringLocation {
    /// Offset of the opening quote.
    pub start: u32,
    /// Offset just past the closing quote, or end of input if unterminated.
    pub end: u32,
    /// Offset of the first content byte.
    pub content_start: u32,
    /// Offset just past the last content byte.
    pub content_end: u32,
}

impl StringLocation {
    /// The whole literal, quotes included.
    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// The content between the quotes.
    #[inline]
    pub const fn content_span(&self) -> Span {
        Span::new(self.content_start, self.content_end)
    }

    /// Returns `true` if a closing quote was found.
    #[inline]
    pub const fn is_terminated(&self) -> bool {
        self.end > self.content_end
    }

    /// Map a source offset to an offset within the content.
    ///
    /// The content end itself maps to the content length, so a caret placed
    /// just before the closing quote still resolves.
    pub fn content_offset(&self, offset: u32) -> Option<u32> {
        (self.content_start..=self.content_end)
            .contains(&offset)
            .then(|| offset - self.content_start)
    }
}
