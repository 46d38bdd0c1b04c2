//! Argument coercions for numeric conversions.
//!
//! Integers pass through, `Nil` is zero, floats truncate toward zero and
//! strings take their leading number (`"12abc"` is 12, `"abc"` is 0).
//! Booleans and lists have no numeric form.

use printc_ir::{CoercionTarget, FormatError};

use crate::Value;

/// Integer coercion, used by `c d i b o x X` and `*` widths.
pub trait ToInteger {
    fn to_integer(&self) -> Result<i128, FormatError>;
}

/// Float coercion, used by `f e E g G`.
pub trait ToFloat {
    fn to_float(&self) -> Result<f64, FormatError>;
}

impl ToInteger for Value {
    fn to_integer(&self) -> Result<i128, FormatError> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Nil => Ok(0),
            Value::Float(x) => truncate(*x).ok_or_else(|| type_error(self, CoercionTarget::Integer)),
            Value::Str(s) => Ok(parse_leading_integer(s)),
            Value::Opaque(argument) => argument
                .as_integer()
                .ok_or_else(|| type_error(self, CoercionTarget::Integer)),
            Value::Bool(_) | Value::List(_) => Err(type_error(self, CoercionTarget::Integer)),
        }
    }
}

impl ToFloat for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "huge integers round to the nearest float like C"
    )]
    fn to_float(&self) -> Result<f64, FormatError> {
        match self {
            Value::Float(x) => Ok(*x),
            Value::Int(n) => Ok(*n as f64),
            Value::Nil => Ok(0.0),
            Value::Str(s) => Ok(parse_leading_float(s)),
            Value::Opaque(argument) => argument
                .as_float()
                .ok_or_else(|| type_error(self, CoercionTarget::Float)),
            Value::Bool(_) | Value::List(_) => Err(type_error(self, CoercionTarget::Float)),
        }
    }
}

fn type_error(value: &Value, target: CoercionTarget) -> FormatError {
    FormatError::ArgumentType {
        value: value.to_string(),
        target,
    }
}

/// Truncate toward zero; `None` for non-finite or out-of-range values.
#[expect(clippy::cast_possible_truncation, reason = "range checked first")]
fn truncate(x: f64) -> Option<i128> {
    // 2^127, the first magnitude i128 cannot hold.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    let t = x.trunc();
    if t.is_finite() && t >= -LIMIT && t < LIMIT {
        Some(t as i128)
    } else {
        None
    }
}

/// Split `text` into an optional sign and the rest, after leading whitespace.
fn split_sign(text: &str) -> (bool, &str) {
    let text = text.trim_start();
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Length of a digit run where single `_` separators may sit between digits.
fn digit_run(bytes: &[u8]) -> usize {
    let mut end = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                i += 1;
                end = i;
            }
            b'_' if end == i && end > 0 && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {
                i += 1;
            }
            _ => break,
        }
    }
    end
}

/// Lenient leading-integer parse. Saturates at the `i128` bounds.
pub fn parse_leading_integer(text: &str) -> i128 {
    let (negative, rest) = split_sign(text);
    let digits = &rest.as_bytes()[..digit_run(rest.as_bytes())];

    let mut magnitude: u128 = 0;
    for &b in digits.iter().filter(|b| b.is_ascii_digit()) {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(u128::from(b - b'0'));
    }

    if negative {
        0i128.checked_sub_unsigned(magnitude).unwrap_or(i128::MIN)
    } else {
        i128::try_from(magnitude).unwrap_or(i128::MAX)
    }
}

/// Lenient leading-float parse: `[+-]digits[.digits][e[+-]digits]`.
pub fn parse_leading_float(text: &str) -> f64 {
    let (negative, rest) = split_sign(text);
    let bytes = rest.as_bytes();

    let int_len = digit_run(bytes);
    let mut end = int_len;
    if bytes.get(end) == Some(&b'.') {
        let frac_len = digit_run(&bytes[end + 1..]);
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }
    if end > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_len = digit_run(&bytes[exp.min(bytes.len())..]);
        if exp_len > 0 {
            end = exp + exp_len;
        }
    }

    let number: String = rest[..end].chars().filter(|&c| c != '_').collect();
    let magnitude = number.parse::<f64>().unwrap_or(0.0);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
