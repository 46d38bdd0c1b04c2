//! `%b`, `%o`, `%x`, `%X`.
//!
//! Without `+` or ` ` a negative value is shown in two's-complement style:
//! the radix complement of its magnitude with an implied infinite run of
//! the maximum digit, written `..f01` for -255 in hex. With zero padding the
//! `..` is dropped and the field is filled with the maximum digit instead,
//! so `%08x` of -1 is `ffffffff`.

use printc_ir::{Directive, Flags, Radix};

use super::{pad, zero_padded, Field};

pub(super) fn render(
    n: i128,
    radix: Radix,
    uppercase: bool,
    directive: &Directive,
    field: Field,
    out: &mut String,
) {
    let flags = directive.flags;
    // The prefix sits outside the padded field.
    if flags.contains(Flags::ALTERNATE) {
        out.push_str(radix.alternate_prefix(uppercase));
    }

    let zero = zero_padded(directive, field);
    if n >= 0 || flags.wants_sign() {
        let digits = magnitude_digits(n.unsigned_abs(), radix, uppercase);
        pad(out, flags.sign_for(n < 0), &digits, field, zero.then_some('0'));
    } else {
        let digits = complement_digits(n.unsigned_abs(), radix, uppercase);
        if zero {
            pad(out, "", &digits, field, Some(max_digit(radix, uppercase)));
        } else {
            pad(out, "..", &digits, field, None);
        }
    }
}

fn magnitude_digits(magnitude: u128, radix: Radix, uppercase: bool) -> String {
    match (radix, uppercase) {
        (Radix::Binary, _) => format!("{magnitude:b}"),
        (Radix::Octal, _) => format!("{magnitude:o}"),
        (Radix::Hex, false) => format!("{magnitude:x}"),
        (Radix::Hex, true) => format!("{magnitude:X}"),
    }
}

fn max_digit(radix: Radix, uppercase: bool) -> char {
    let c = char::from_digit(radix.base() - 1, radix.base()).unwrap_or('0');
    if uppercase {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

/// Radix complement of `magnitude` over one more digit than it needs, with
/// a doubled leading maximum digit collapsed to one.
///
/// `magnitude` must be non-zero.
fn complement_digits(magnitude: u128, radix: Radix, uppercase: bool) -> String {
    let base = radix.base();
    let max = base - 1;

    // Least significant digit first, plus one leading zero digit.
    let mut digits: Vec<u32> = magnitude_digits(magnitude, radix, false)
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(base))
        .collect();
    digits.push(0);

    // base^len - magnitude == (max - d for each digit) + 1
    let mut carry = 1;
    for d in &mut digits {
        let sum = max - *d + carry;
        *d = sum % base;
        carry = sum / base;
    }

    let mut text: String = digits
        .iter()
        .rev()
        .filter_map(|&d| char::from_digit(d, base))
        .collect();
    let max_char = max_digit(radix, false);
    let mut leading = text.chars();
    if leading.next() == Some(max_char) && leading.next() == Some(max_char) {
        text.remove(0);
    }
    if uppercase {
        text.make_ascii_uppercase();
    }
    text
}
