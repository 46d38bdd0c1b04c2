//! Runtime argument values.
//!
//! Arguments are dynamically typed: one argument list can mix integers,
//! strings and floats, and the conversion decides how each is coerced.
//! Heap variants are `Arc`-backed so argument lists clone cheaply and can
//! be shared across threads.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A host value supplied as a format argument.
///
/// Implement this for types that should be passed through
/// [`Value::Opaque`]. Only `display` is required; the coercions default to
/// "not convertible".
pub trait Argument: Send + Sync + fmt::Debug {
    /// Display form, used by `%s`.
    fn display(&self) -> String;

    /// Inspect form, used by `%p`.
    fn inspect(&self) -> String {
        self.display()
    }

    /// Integer form for `c d i b o x X` and `*` widths.
    fn as_integer(&self) -> Option<i128> {
        None
    }

    /// Float form for `f e E g G`.
    fn as_float(&self) -> Option<f64> {
        None
    }
}

/// One format argument.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absent value. Displays as the empty string, inspects as `nil`.
    #[default]
    Nil,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(Arc<str>),
    List(Arc<[Value]>),
    /// A host value answering through its [`Argument`] impl.
    Opaque(Arc<dyn Argument>),
}

impl Value {
    /// Wrap a host value.
    pub fn opaque<A: Argument + 'static>(argument: A) -> Self {
        Value::Opaque(Arc::new(argument))
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Display form (`%s`). Borrows when the value already is text.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Value::Nil => Cow::Borrowed(""),
            Value::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Inspect form (`%p`): `nil`, quoted strings, bracketed lists.
    pub fn inspect(&self) -> String {
        match self {
            Value::Nil => "nil".to_owned(),
            Value::Str(s) => format!("{:?}", &**s),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::inspect).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Opaque(argument) => argument.inspect(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => f.write_str(s),
            // Lists display as their inspect form.
            Value::List(_) => f.write_str(&self.inspect()),
            Value::Opaque(argument) => f.write_str(&argument.display()),
        }
    }
}

/// Shortest round-trip digits. Fixed notation while the decimal exponent is
/// in `-4..=15` (`0.0001`, `3.0`), scientific outside it (`1.0e+20`,
/// `1.5e-05`).
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let scientific = format!("{x:e}");
    let (mantissa, exp) = match scientific.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..=15).contains(&exp) {
        let fixed = format!("{x}");
        if fixed.contains('.') {
            f.write_str(&fixed)
        } else {
            write!(f, "{fixed}.0")
        }
    } else {
        let point = if mantissa.contains('.') { "" } else { ".0" };
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}{point}e{sign}{:02}", exp.unsigned_abs())
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(n: $ty) -> Self {
                    Value::Int(i128::from(n))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Value::Int(n as i128)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i128)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(Arc::from(c.encode_utf8(&mut [0; 4]) as &str))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Value::Str(s)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Nil
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
