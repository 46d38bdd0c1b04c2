//! Hand-written scanner producing literal spans and raw directives.
//!
//! The scanner is an [`Iterator`] over `Result<RawToken, ScanError>`. It
//! allocates nothing on the success path; literal and directive parts are
//! slices of the input.
//!
//! # Literal capture
//!
//! Text between directives is accumulated lazily: `literal_start` marks the
//! first byte not yet emitted, and a literal is only cut when a complete
//! directive is found or the input ends. A directive that runs out of input
//! before its type character therefore folds into the trailing literal.
//! After the first error the scanner is fused.

use crate::cursor::Cursor;
use crate::token::{is_conversion_char, is_flag_char, RawDirective, RawToken, ScanError, Span};

/// Outcome of scanning from one `%`.
enum DirectiveScan<'a> {
    Complete(RawDirective<'a>),
    /// Input ended before a type character.
    Incomplete,
}

/// Format-string scanner.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// First byte of text not yet emitted as a literal.
    literal_start: u32,
    /// Directive found right after a literal; emitted on the next call.
    pending: Option<RawDirective<'a>>,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            literal_start: 0,
            pending: None,
            done: false,
        }
    }

    /// Emit whatever literal text remains and finish.
    fn finish(&mut self) -> Option<Result<RawToken<'a>, ScanError>> {
        self.done = true;
        let end = self.cursor.source_len();
        if self.literal_start < end {
            let text = self.cursor.slice(self.literal_start, end);
            self.literal_start = end;
            Some(Ok(RawToken::Literal(text)))
        } else {
            None
        }
    }

    /// Scan one directive. The cursor is on its `%`.
    fn directive(&mut self) -> Result<DirectiveScan<'a>, ScanError> {
        let start = self.cursor.pos();
        self.cursor.advance();

        let flags_start = self.cursor.pos();
        self.cursor.eat_while(is_flag_char);
        let flags = self.cursor.slice_from(flags_start);

        let position = self.position();

        // Flags end before `N$`, so after a position a leading `0` belongs
        // to the width.
        let width = match self.cursor.current() {
            b'*' => Some(self.run(|b| b == b'*')),
            b'1'..=b'9' => Some(self.run(|b| b.is_ascii_digit())),
            b'0' if position.is_some() => Some(self.run(|b| b.is_ascii_digit())),
            _ => None,
        };

        let precision = if self.cursor.current() == b'.' && !self.cursor.is_eof() {
            self.cursor.advance();
            Some(self.run(|b| b.is_ascii_digit()))
        } else {
            None
        };

        if self.cursor.is_eof() {
            return Ok(DirectiveScan::Incomplete);
        }

        let byte = self.cursor.current();
        if is_conversion_char(byte) {
            self.cursor.advance();
            return Ok(DirectiveScan::Complete(RawDirective {
                raw: self.cursor.slice_from(start),
                flags,
                position,
                width,
                precision,
                conversion: char::from(byte),
                span: Span::new(start, self.cursor.pos()),
            }));
        }

        self.cursor.advance_char();
        Err(ScanError::Malformed {
            directive: self.cursor.slice_from(start).to_owned(),
            span: Span::new(start, self.cursor.pos()),
        })
    }

    /// Scan an optional `N$`. Digits not followed by `$` are left for the
    /// width.
    fn position(&mut self) -> Option<&'a str> {
        if !matches!(self.cursor.current(), b'1'..=b'9') {
            return None;
        }
        let snapshot = self.cursor;
        let digits = self.run(|b| b.is_ascii_digit());
        if self.cursor.current() == b'$' && !self.cursor.is_eof() {
            self.cursor.advance();
            Some(digits)
        } else {
            self.cursor = snapshot;
            None
        }
    }

    fn run(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_while(pred);
        self.cursor.slice_from(start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<RawToken<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(directive) = self.pending.take() {
            return Some(Ok(RawToken::Directive(directive)));
        }
        if self.done {
            return None;
        }

        if !self.cursor.eat_until_percent() {
            return self.finish();
        }

        let percent = self.cursor.pos();
        match self.directive() {
            Ok(DirectiveScan::Complete(directive)) => {
                let literal = self.cursor.slice(self.literal_start, percent);
                self.literal_start = self.cursor.pos();
                if literal.is_empty() {
                    Some(Ok(RawToken::Directive(directive)))
                } else {
                    self.pending = Some(directive);
                    Some(Ok(RawToken::Literal(literal)))
                }
            }
            Ok(DirectiveScan::Incomplete) => self.finish(),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan a whole format string.
///
/// Stops at the first malformed directive.
pub fn scan(source: &str) -> Result<Vec<RawToken<'_>>, ScanError> {
    Scanner::new(source).collect()
}

#[cfg(test)]
mod tests;
