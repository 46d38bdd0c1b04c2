//! Low-level scanner for printf-style format strings.
//!
//! Splits a format string into literal spans and raw conversion directives.
//! The scanner does not interpret flags, resolve argument numbering or pick
//! defaults; that is the planner's job. It only enforces the directive
//! grammar:
//!
//! ```text
//! % [flags]* [N$]? [width | *]? [. precision]? type
//! flags := '-' | '+' | '0' | ' ' | '#'
//! type  := 's' | 'c' | 'd' | 'i' | 'b' | 'o' | 'x' | 'X'
//!        | 'f' | 'e' | 'E' | 'g' | 'G' | 'p' | '%'
//! ```
//!
//! # Design
//!
//! - **Standalone**: no `printc_*` dependencies.
//! - **Zero-copy**: tokens borrow slices of the input.
//! - **Lazy literals**: a directive that runs off the end of the input is
//!   literal text, never an error.
//! - **Strict directives**: a `%` that meets an illegal character before its
//!   type character is [`ScanError::Malformed`].

mod cursor;
mod raw_scanner;
mod token;

pub use cursor::Cursor;
pub use raw_scanner::{scan, Scanner};
pub use token::{is_conversion_char, is_flag_char, RawDirective, RawToken, ScanError, Span};
