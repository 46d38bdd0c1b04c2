//! Raw token types produced by the [`Scanner`](crate::Scanner).

use std::fmt;

/// Byte range within the scanned format string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// One `%...` occurrence, split into its textual parts.
///
/// Every part is a slice of the original format string. Absent parts are
/// `None`; `flags` is empty when no flag characters were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDirective<'a> {
    /// The whole directive, including the leading `%`.
    pub raw: &'a str,
    /// Flag characters in source order (duplicates preserved).
    pub flags: &'a str,
    /// Digits of an `N$` argument position, without the `$`.
    pub position: Option<&'a str>,
    /// Width digits, or a run of one or more `*`.
    pub width: Option<&'a str>,
    /// Precision digits after `.`; `Some("")` for a bare `.`.
    pub precision: Option<&'a str>,
    /// The conversion type character.
    pub conversion: char,
    pub span: Span,
}

/// A scanner output item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// Text emitted verbatim.
    Literal(&'a str),
    /// A conversion directive.
    Directive(RawDirective<'a>),
}

impl<'a> RawToken<'a> {
    /// The source text this token was scanned from.
    pub fn source_text(&self) -> &'a str {
        match self {
            RawToken::Literal(text) => text,
            RawToken::Directive(directive) => directive.raw,
        }
    }
}

/// Scanner failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A `%` directive hit a character that is neither a legal continuation
    /// nor a conversion type. `directive` includes the offending character.
    #[error("malformed format string - {directive}")]
    Malformed { directive: String, span: Span },
}

/// Returns `true` for the five flag characters.
#[inline]
pub fn is_flag_char(byte: u8) -> bool {
    matches!(byte, b'-' | b'+' | b'0' | b' ' | b'#')
}

/// Returns `true` for every conversion type character, including `%`.
#[inline]
pub fn is_conversion_char(byte: u8) -> bool {
    matches!(
        byte,
        b's' | b'c'
            | b'd'
            | b'i'
            | b'b'
            | b'o'
            | b'x'
            | b'X'
            | b'f'
            | b'e'
            | b'E'
            | b'g'
            | b'G'
            | b'p'
            | b'%'
    )
}
