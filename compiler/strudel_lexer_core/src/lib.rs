//! Low-level scanners for Strudel pattern code.
//!
//! Two nested scanners over a sentinel-terminated [`SourceBuffer`]:
//!
//! - [`RawScanner`] walks host code (the JavaScript-like calls around
//!   patterns) and classifies comments, literals, numbers, names and
//!   punctuation.
//! - [`MiniScanner`] walks the content of one quoted literal and classifies
//!   mini-notation: brackets, repetition operators, rests, alternation,
//!   numbers, notes and sample names.
//!
//! Both are total: any text, however malformed, scans to a token stream
//! that tiles the source exactly. Neither renders markup nor logs; that is
//! the job of `strudel_highlight`.
//!
//! ```
//! use strudel_lexer_core::{scan, Tag};
//!
//! let source = r#"s("bd").lpf(800)"#;
//! let scan = scan(source);
//! assert_eq!(scan.strings.len(), 1);
//! assert!(scan.tokens.iter().any(|t| t.tag == Tag::Method));
//! ```

mod cursor;
pub mod known;
mod mini_scanner;
mod raw_scanner;
mod source_buffer;
mod span;
mod string_location;
mod tag;

pub use cursor::Cursor;
pub use mini_scanner::{is_note_name, scan_mini, MiniScanner};
pub use raw_scanner::{scan, RawScanner, Scan};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use string_location::StringLocation;
pub use tag::{Tag, Token};
