//! Printc IR - shared types for the format-string compiler
//!
//! This crate holds the data every stage agrees on:
//! - `Directive` and its parts (flags, width, argument reference, conversion)
//! - `Plan`, the compiled and immutable step list
//! - `FormatError`, the typed error for compile and apply
//! - `FormatString` handles and the sharded interner that issues them
//!
//! # Design Philosophy
//!
//! - **Compile once**: everything derivable from the format text alone lives
//!   in a `Plan`, including compile errors (a poisoned plan).
//! - **Intern keys**: format strings become `FormatString(u32)` so the plan
//!   cache hashes and compares integers.
//! - **Share, don't copy**: plans are `Arc`-backed and cheap to clone.

mod directive;
mod error;
mod format_string;
mod interner;
mod plan;

pub use directive::{ArgRef, Conversion, Directive, Flags, FloatKind, Radix, Width};
pub use error::{CoercionTarget, FormatError};
pub use format_string::FormatString;
pub use interner::{InternError, StringInterner};
pub use plan::{ConvertStep, NumberingMode, Plan, Step};
