//! Float rendering for `f e E g G`.
//!
//! Float output is the one piece of conversion delegated to a pluggable
//! collaborator. [`CFloatRenderer`] follows C `printf`: locale-free, exact
//! decimal expansion, two-digit minimum exponents, and `%g` choosing between
//! fixed and exponent notation by the `P > X >= -4` rule.

use printc_ir::{Flags, FloatKind};

/// Everything a renderer needs from the directive.
///
/// `width` is already normalized: a negative dynamic width has been turned
/// into `LEFT_JUSTIFY` plus its magnitude.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloatSpec {
    pub flags: Flags,
    pub width: Option<usize>,
    /// `None` only for `e`/`E` without an explicit precision.
    pub precision: Option<u32>,
    pub kind: FloatKind,
}

/// Renders one float conversion, including sign, padding and justification.
pub trait FloatRenderer: Send + Sync {
    fn render(&self, value: f64, spec: &FloatSpec) -> String;
}

/// C-compatible float rendering.
#[derive(Copy, Clone, Debug, Default)]
pub struct CFloatRenderer;

/// Precision C uses when none is given.
const DEFAULT_PRECISION: usize = 6;

impl FloatRenderer for CFloatRenderer {
    fn render(&self, value: f64, spec: &FloatSpec) -> String {
        let upper = matches!(
            spec.kind,
            FloatKind::Exponent { upper: true } | FloatKind::General { upper: true }
        );
        let alternate = spec.flags.contains(Flags::ALTERNATE);
        let precision = spec
            .precision
            .map_or(DEFAULT_PRECISION, |p| p as usize);

        let magnitude = value.abs();
        let finite = value.is_finite();
        let body = if value.is_nan() {
            "nan".to_owned()
        } else if value.is_infinite() {
            "inf".to_owned()
        } else {
            match spec.kind {
                FloatKind::Fixed => fixed(magnitude, precision, alternate),
                FloatKind::Exponent { .. } => exponent(magnitude, precision, alternate),
                FloatKind::General { .. } => general(magnitude, precision, alternate),
            }
        };
        let body = if upper { body.to_ascii_uppercase() } else { body };
        let sign = spec.flags.sign_for(value.is_sign_negative());

        let len = sign.len() + body.len();
        let fill = spec.width.map_or(0, |w| w.saturating_sub(len));
        let mut out = String::with_capacity(len + fill);

        if spec.flags.contains(Flags::LEFT_JUSTIFY) {
            out.push_str(sign);
            out.push_str(&body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if spec.flags.contains(Flags::ZERO_PAD) && finite {
            out.push_str(sign);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(&body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(sign);
            out.push_str(&body);
        }
        out
    }
}

/// `%f` body for a non-negative finite value.
fn fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut s = format!("{value:.precision$}");
    if precision == 0 && alternate {
        s.push('.');
    }
    s
}

/// Split Rust's `{:e}` output into mantissa and decimal exponent.
fn split_exponent(value: f64, precision: usize) -> (String, i32) {
    let s = format!("{value:.precision$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_owned(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn join_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

/// `%e` body for a non-negative finite value.
fn exponent(value: f64, precision: usize, alternate: bool) -> String {
    let (mut mantissa, exp) = split_exponent(value, precision);
    if precision == 0 && alternate {
        mantissa.push('.');
    }
    join_exponent(&mantissa, exp)
}

/// `%g` body for a non-negative finite value.
fn general(value: f64, precision: usize, alternate: bool) -> String {
    let p = precision.max(1);
    // The exponent X as `%e` with precision P - 1 would print it, after
    // rounding.
    let (_, x) = split_exponent(value, p - 1);
    let p_i = i32::try_from(p).unwrap_or(i32::MAX);

    if p_i > x && x >= -4 {
        let frac = usize::try_from(p_i - 1 - x).unwrap_or(0);
        let mut s = format!("{value:.frac$}");
        if alternate {
            if !s.contains('.') {
                s.push('.');
            }
        } else {
            strip_trailing_zeros(&mut s);
        }
        s
    } else {
        let (mut mantissa, exp) = split_exponent(value, p - 1);
        if alternate {
            if !mantissa.contains('.') {
                mantissa.push('.');
            }
        } else {
            strip_trailing_zeros(&mut mantissa);
        }
        join_exponent(&mantissa, exp)
    }
}

/// Remove trailing fraction zeros, and the point if nothing is left after it.
fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        let keep = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(keep);
    }
}
