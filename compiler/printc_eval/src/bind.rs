//! Argument binding.
//!
//! Slots were fixed when the plan was compiled, so binding is indexing plus
//! coercion. Within a step the `*` width is resolved before the value, and
//! steps bind left to right; the first failure wins.

use std::borrow::Cow;

use printc_ir::{Conversion, ConvertStep, Directive, FormatError, Plan, Step, Width};

use crate::coerce::{ToFloat, ToInteger};
use crate::Value;

/// Largest field width accepted from a `*` argument (a C `int`).
const MAX_DYNAMIC_WIDTH: u128 = i32::MAX as u128;

/// Resolved field geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub width: Option<usize>,
    /// Pad on the right. Set by `-` or by a negative `*` width.
    pub left: bool,
}

/// A coerced argument, ready for its converter.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<'a> {
    Integer(i128),
    Float(f64),
    Text(Cow<'a, str>),
}

/// A conversion step with its arguments resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundConversion<'a> {
    pub directive: &'a Directive,
    pub field: Field,
    pub operand: Operand<'a>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Bound<'a> {
    Literal(&'a str),
    Convert(BoundConversion<'a>),
}

/// Bind `args` to every step of `plan`.
///
/// A poisoned plan yields its compile error before the argument count is
/// looked at. Extra arguments are ignored.
pub fn bind<'a>(plan: &'a Plan, args: &'a [Value]) -> Result<Vec<Bound<'a>>, FormatError> {
    plan.check()?;

    let required = plan.required_arguments();
    if args.len() < required {
        return Err(too_few(required, args.len()));
    }

    plan.steps()
        .iter()
        .map(|step| match step {
            Step::Literal(text) => Ok(Bound::Literal(text)),
            Step::Convert(convert) => bind_conversion(convert, args, required).map(Bound::Convert),
        })
        .collect()
}

fn bind_conversion<'a>(
    step: &'a ConvertStep,
    args: &'a [Value],
    required: usize,
) -> Result<BoundConversion<'a>, FormatError> {
    let arg = |slot: usize| args.get(slot).ok_or_else(|| too_few(required, args.len()));
    let directive = &step.directive;

    let mut field = Field {
        width: None,
        left: directive.left_justified(),
    };
    match (directive.width, step.width_slot) {
        (Width::Literal(width), _) => field.width = Some(width as usize),
        (Width::FromArg(_), Some(slot)) => {
            let width = arg(slot)?.to_integer()?;
            let magnitude = width.unsigned_abs();
            if magnitude > MAX_DYNAMIC_WIDTH {
                return Err(FormatError::WidthTooBig { width });
            }
            #[expect(clippy::cast_possible_truncation, reason = "bounded by a C int")]
            let magnitude = magnitude as usize;
            field.width = Some(magnitude);
            field.left |= width < 0;
        }
        (Width::FromArg(_) | Width::None, _) => {}
    }

    let operand = match directive.conversion {
        Conversion::PercentLiteral => Operand::Text(Cow::Borrowed("%")),
        conversion => {
            let value = arg(step.value_slot)?;
            match conversion {
                Conversion::String => Operand::Text(value.display_text()),
                Conversion::Inspect => Operand::Text(Cow::Owned(value.inspect())),
                Conversion::Float(_) => Operand::Float(value.to_float()?),
                _ => Operand::Integer(value.to_integer()?),
            }
        }
    };

    Ok(BoundConversion {
        directive,
        field,
        operand,
    })
}

fn too_few(required: usize, supplied: usize) -> FormatError {
    FormatError::TooFewArguments { required, supplied }
}
