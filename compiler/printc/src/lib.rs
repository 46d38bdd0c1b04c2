//! Printc - compiled printf-style format strings.
//!
//! A format string is compiled once into an immutable [`Plan`] and cached;
//! every later use skips parsing and goes straight to binding arguments and
//! converting them.
//!
//! ```
//! use printc::args;
//!
//! assert_eq!(printc::format("%-5s|%05d", &args!["ab", -42]).unwrap(), "ab   |-0042");
//! assert_eq!(printc::format("%2$s %1$s", &args!["a", "b"]).unwrap(), "b a");
//! ```
//!
//! # Crates
//!
//! - `printc_lexer_core`: scanner (literal text and raw directives)
//! - `printc_ir`: directives, plans, errors, format-string interner
//! - `printc_plan`: validation and slot assignment
//! - `printc_eval`: argument binding and conversion
//! - `printc` (this crate): plan cache, [`Formatter`], process-wide entry points
//!
//! # Logging
//!
//! Compilation and cache traffic are instrumented with `tracing`. Call
//! [`init_tracing`] and set `RUST_LOG` (for example `RUST_LOG=printc=debug`)
//! to see them.

mod cache;
mod formatter;

use std::sync::{Once, OnceLock};

pub use cache::{CacheStats, PlanCache};
pub use formatter::Formatter;

pub use printc_eval::{
    args, Argument, CFloatRenderer, FloatRenderer, FloatSpec, ToFloat, ToInteger, Value,
};
pub use printc_ir::{
    CoercionTarget, Conversion, Directive, Flags, FloatKind, FormatError, FormatString,
    NumberingMode, Plan, Step,
};

static GLOBAL_FORMATTER: OnceLock<Formatter> = OnceLock::new();

/// The process-wide formatter (lazily initialized).
pub fn global() -> &'static Formatter {
    GLOBAL_FORMATTER.get_or_init(Formatter::new)
}

/// Compile `format` on the process-wide formatter.
pub fn compile(format: &str) -> Plan {
    global().compile(format)
}

/// Compile `format`, returning its compile error if it has one.
pub fn try_compile(format: &str) -> Result<Plan, FormatError> {
    global().try_compile(format)
}

/// Apply a plan with the default float renderer.
pub fn apply(plan: &Plan, args: &[Value]) -> Result<String, FormatError> {
    global().apply(plan, args)
}

/// Compile (or fetch) `format` and apply it to `args`.
pub fn format(format: &str, args: &[Value]) -> Result<String, FormatError> {
    global().format(format, args)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing if `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host application wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
