//! Printc evaluation: binding arguments to a `Plan` and converting them.
//!
//! # Pipeline Position
//!
//! ```text
//! format -> Scan -> Plan -> (cache) -> **Bind -> Convert** -> String
//! ```
//!
//! - `value`: dynamically typed arguments (`Value`, `Argument`)
//! - `coerce`: integer and float coercions (`ToInteger`, `ToFloat`)
//! - `bind`: slot lookup, `*` width resolution
//! - `convert`: per-conversion text rendering
//! - `float`: the pluggable float renderer and its C-compatible default
//!
//! Plans are only read here. `apply` takes no locks and allocates one
//! output buffer plus whatever the conversions need.

mod bind;
mod coerce;
mod convert;
mod exec;
mod float;
mod value;

pub use bind::{bind, Bound, BoundConversion, Field, Operand};
pub use coerce::{parse_leading_float, parse_leading_integer, ToFloat, ToInteger};
pub use convert::render;
pub use exec::apply;
pub use float::{CFloatRenderer, FloatRenderer, FloatSpec};
pub use value::{Argument, Value};

/// Build an argument array from heterogeneous expressions.
///
/// ```
/// use printc_eval::{args, Value};
///
/// let args = args![1, "two", 3.0, None::<i32>];
/// assert!(matches!(args[3], Value::Nil));
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Value; 0] = [];
        empty
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Value::from($arg)),+]
    };
}
