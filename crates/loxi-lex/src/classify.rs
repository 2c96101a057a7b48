//! Grapheme classification.
//!
//! Lexical classes are ASCII-only: a grapheme belongs to a class exactly
//! when it is a single ASCII byte in that class. Multi-byte clusters never
//! classify as digits or identifier characters.

/// Returns true for the ASCII digits `0-9`.
#[inline]
pub fn is_digit(grapheme: &str) -> bool {
    matches!(grapheme.as_bytes(), [b'0'..=b'9'])
}

/// Returns true for graphemes that may start an identifier: ASCII letters
/// and `_`.
#[inline]
pub fn is_ident_start(grapheme: &str) -> bool {
    matches!(grapheme.as_bytes(), [b'a'..=b'z' | b'A'..=b'Z' | b'_'])
}

/// Returns true for graphemes that may continue an identifier.
#[inline]
pub fn is_ident_continue(grapheme: &str) -> bool {
    is_ident_start(grapheme) || is_digit(grapheme)
}
