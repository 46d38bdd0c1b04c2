//! Format errors.
//!
//! Compile-time kinds are memoized on a poisoned [`Plan`](crate::Plan) and
//! returned by every apply. Bind-time kinds depend on the argument list and
//! are produced fresh per call.

/// Typed failure of compiling or applying a format.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    // Compile time
    /// A `%` directive with no legal conversion type character.
    #[error("malformed format string - {directive}")]
    MalformedFormat { directive: String },

    /// `%%` carrying flags, a width or a precision.
    #[error("illegal format character - {conversion}")]
    IllegalDirective { conversion: char },

    /// `N$` references mixed with sequential ones.
    #[error("{}", mixed_numbering_message(.position, .sequential, .positional_first))]
    MixedArgumentNumbering {
        /// The 1-based position involved in the conflict.
        position: u32,
        /// The 1-based sequential argument number involved.
        sequential: u32,
        /// Which style the format string established first.
        positional_first: bool,
    },

    /// More than one `*` for a single directive's width.
    #[error("width given twice")]
    WidthGivenTwice,

    // Bind time
    #[error("too few arguments (needs {required}, got {supplied})")]
    TooFewArguments { required: usize, supplied: usize },

    /// An argument without the coercion its conversion needs.
    #[error("can't convert {value} into {target}")]
    ArgumentType {
        value: String,
        target: CoercionTarget,
    },

    /// A `*` width whose magnitude does not fit a C `int`.
    #[error("width too big ({width})")]
    WidthTooBig { width: i128 },
}

impl FormatError {
    /// Whether this error is fixed by the format string alone.
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            FormatError::MalformedFormat { .. }
                | FormatError::IllegalDirective { .. }
                | FormatError::MixedArgumentNumbering { .. }
                | FormatError::WidthGivenTwice
        )
    }

    /// Whether this is one of the malformed-directive kinds.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            FormatError::MalformedFormat { .. } | FormatError::IllegalDirective { .. }
        )
    }
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "called from the derived Display impl, which passes field references"
)]
fn mixed_numbering_message(position: &u32, sequential: &u32, positional_first: &bool) -> String {
    if *positional_first {
        format!("unnumbered({sequential}) mixed with numbered")
    } else {
        format!("numbered({position}) after unnumbered({sequential})")
    }
}

/// The type an argument was being coerced into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CoercionTarget {
    Integer,
    Float,
}

impl std::fmt::Display for CoercionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CoercionTarget::Integer => "Integer",
            CoercionTarget::Float => "Float",
        })
    }
}
