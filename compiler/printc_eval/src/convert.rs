//! Converters: bound operands to text.
//!
//! Each conversion appends to a shared output buffer. Width counts `char`s.
//! Zero padding only applies to numeric conversions with a width, and never
//! to a left-justified field; the sign goes before the zeros.

mod radix;

use printc_ir::{Conversion, Directive, Flags, FloatKind};

use crate::bind::{BoundConversion, Field, Operand};
use crate::float::{FloatRenderer, FloatSpec};

/// Append the text of one bound conversion to `out`.
pub fn render(conversion: &BoundConversion<'_>, floats: &dyn FloatRenderer, out: &mut String) {
    let BoundConversion {
        directive,
        field,
        operand,
    } = conversion;

    match operand {
        Operand::Text(text) => {
            let mut text: &str = text;
            if directive.conversion.truncates() {
                text = truncate(text, directive.precision);
            }
            pad(out, "", text, *field, None);
        }
        Operand::Float(value) => {
            let kind = match directive.conversion {
                Conversion::Float(kind) => kind,
                _ => FloatKind::Fixed,
            };
            let mut flags = directive.flags;
            flags.set(Flags::LEFT_JUSTIFY, field.left);
            let spec = FloatSpec {
                flags,
                width: field.width,
                precision: directive.precision,
                kind,
            };
            out.push_str(&floats.render(*value, &spec));
        }
        Operand::Integer(n) => match directive.conversion {
            Conversion::Char => {
                let mut buf = [0; 4];
                pad(out, "", latin1(*n).encode_utf8(&mut buf), *field, None);
            }
            Conversion::Radix { radix, uppercase } => {
                radix::render(*n, radix, uppercase, directive, *field, out);
            }
            _ => decimal(*n, directive, *field, out),
        },
    }
}

/// Whether the `0` flag is in effect for this directive and field.
fn zero_padded(directive: &Directive, field: Field) -> bool {
    directive.flags.contains(Flags::ZERO_PAD)
        && directive.conversion.allows_zero_pad()
        && field.width.is_some()
        && !field.left
}

/// Emit `prefix` and `body` inside `field`.
///
/// With `zero_fill` the fill goes between prefix and body (`-0042`);
/// otherwise spaces go outside both.
fn pad(out: &mut String, prefix: &str, body: &str, field: Field, zero_fill: Option<char>) {
    let len = prefix.chars().count() + body.chars().count();
    let fill = field.width.map_or(0, |width| width.saturating_sub(len));

    match zero_fill {
        Some(c) if !field.left => {
            out.push_str(prefix);
            out.extend(std::iter::repeat_n(c, fill));
            out.push_str(body);
        }
        _ if field.left => {
            out.push_str(prefix);
            out.push_str(body);
            out.extend(std::iter::repeat_n(' ', fill));
        }
        _ => {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(prefix);
            out.push_str(body);
        }
    }
}

/// At most `precision` chars of `text`.
fn truncate(text: &str, precision: Option<u32>) -> &str {
    match precision.and_then(|p| text.char_indices().nth(p as usize)) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// `%c`: the integer modulo 256, as a Latin-1 code point.
fn latin1(n: i128) -> char {
    char::from(u8::try_from(n.rem_euclid(256)).unwrap_or_default())
}

/// `%d` / `%i`.
fn decimal(n: i128, directive: &Directive, field: Field, out: &mut String) {
    let sign = directive.flags.sign_for(n < 0);
    let digits = n.unsigned_abs().to_string();
    let zero = zero_padded(directive, field).then_some('0');
    pad(out, sign, &digits, field, zero);
}
