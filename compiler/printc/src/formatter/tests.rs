#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;
use printc_eval::FloatSpec;

use super::*;

#[test]
fn format_compiles_once_per_string() {
    let formatter = Formatter::new();
    let args = [Value::from(1)];
    assert_eq!(formatter.format("n=%d", &args).unwrap(), "n=1");
    assert_eq!(formatter.format("n=%d", &args).unwrap(), "n=1");
    let stats = formatter.cache().stats();
    assert_eq!(stats.compiles, 1);
    assert_eq!(stats.hits, 1);
}

#[test]
fn compile_returns_shared_plan() {
    let formatter = Formatter::new();
    let a = formatter.compile("%s");
    let b = formatter.compile(&String::from("%s"));
    assert!(a.ptr_eq(&b));
}

#[test]
fn try_compile_surfaces_memoized_error() {
    let formatter = Formatter::new();
    let err = formatter.try_compile("%s %1$s").unwrap_err();
    assert_eq!(err.to_string(), "unnumbered(1) mixed with numbered");
    // Still cached, and compile() hands back the poisoned plan.
    assert!(formatter.compile("%s %1$s").is_poisoned());
    assert_eq!(formatter.cache().stats().compiles, 1);
}

#[test]
fn intern_matches_compile_key() {
    let formatter = Formatter::new();
    let key = formatter.intern("%d");
    let plan = formatter.compile("%d");
    assert!(formatter.cache().get(key).is_some_and(|p| p.ptr_eq(&plan)));
    assert_eq!(formatter.interner().lookup(key), "%d");
}

#[derive(Debug)]
struct Fixed2;

impl FloatRenderer for Fixed2 {
    fn render(&self, value: f64, _spec: &FloatSpec) -> String {
        format!("{value:.2}")
    }
}

#[test]
fn custom_float_renderer() {
    let formatter = Formatter::with_float_renderer(Fixed2);
    assert_eq!(formatter.format("%g", &[Value::from(1.0)]).unwrap(), "1.00");
}

#[test]
fn formatters_are_independent() {
    let a = Formatter::new();
    let b = Formatter::new();
    a.compile("%d");
    assert_eq!(a.cache().len(), 1);
    assert!(b.cache().is_empty());
}
