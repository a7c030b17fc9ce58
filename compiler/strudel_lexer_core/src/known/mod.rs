//! Fixed name tables for the host-code scanner.
//!
//! Three immutable sets, built once on first use:
//! - pattern functions recognised as bare calls (`note`, `s`, `stack`, ...)
//! - the same names as chained methods (`.lpf`, `.room`, ...)
//! - literal keywords (`true`, `false`, `null`, `undefined`)
//!
//! Methods share the function table: `.name` is a known method exactly when
//! `name` is a known function.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Pattern functions, in the order the notebook documents them.
pub const FUNCTIONS: &[&str] = &[
    // Sources and structure
    "note", "sound", "s", "n", "stack", "sequence", "cat", "fastcat", "slowcat",
    "polymeter", "polyrhythm",
    // Time
    "rev", "fast", "slow", "early", "late",
    // Conditional / random
    "every", "when", "sometimes", "often", "rarely", "almostNever", "almostAlways",
    // Stereo and effects
    "jux", "juxBy", "pan", "gain", "velocity", "lpf", "hpf", "bpf", "vowel",
    "delay", "delaytime", "delayfeedback", "room", "size", "orbit",
    // Sample playback
    "speed", "begin", "end", "cut", "loop", "loopAt",
    // Distortion
    "crush", "coarse", "shape", "distort",
    // Envelope
    "attack", "decay", "sustain", "release",
    // Pitch
    "freq", "midinote", "octave", "degree", "scale",
    // Rhythm
    "struct", "mask", "euclid", "euclidLegato",
    "ply", "striate", "chop", "slice",
    // Global
    "setcps", "cps", "samples", "analyze",
];

/// Literal keywords.
pub const KEYWORDS: &[&str] = &["true", "false", "null", "undefined"];

static FUNCTION_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| FUNCTIONS.iter().copied().collect());

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Returns `true` if `name` is a known pattern function.
#[inline]
pub fn is_function(name: &str) -> bool {
    FUNCTION_SET.contains(name)
}

/// Returns `true` if `dotted` (including its leading `.`) is a known method.
#[inline]
pub fn is_method(dotted: &str) -> bool {
    dotted.strip_prefix('.').is_some_and(is_function)
}

/// Returns `true` if `word` is a literal keyword.
#[inline]
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Byte-slice lookup helper for the scanner. Non-UTF-8 input never matches.
#[inline]
pub(crate) fn lookup_bytes(bytes: &[u8], pred: fn(&str) -> bool) -> bool {
    std::str::from_utf8(bytes).is_ok_and(pred)
}
