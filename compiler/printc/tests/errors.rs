// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Compile-time and bind-time errors.

use pretty_assertions::assert_eq;
use printc::{args, CoercionTarget, FormatError, Formatter, NumberingMode};

#[test]
fn mixed_numbering_is_rejected_at_compile() {
    let err = printc::try_compile("%s %2$s").unwrap_err();
    assert_eq!(
        err,
        FormatError::MixedArgumentNumbering {
            position: 2,
            sequential: 1,
            positional_first: false,
        }
    );
    assert_eq!(printc::compile("%s %2$s").numbering_mode(), NumberingMode::Conflict);
}

#[test]
fn mixed_numbering_other_direction() {
    let err = printc::try_compile("%1$s %s").unwrap_err();
    assert_eq!(err.to_string(), "unnumbered(1) mixed with numbered");
}

#[test]
fn too_few_arguments() {
    let plan = printc::compile("%d %d");
    assert_eq!(
        printc::apply(&plan, &args![1]).unwrap_err(),
        FormatError::TooFewArguments {
            required: 2,
            supplied: 1
        }
    );
}

#[test]
fn star_width_counts_toward_arguments() {
    let err = printc::format("%*d", &args![5]).unwrap_err();
    assert_eq!(
        err,
        FormatError::TooFewArguments {
            required: 2,
            supplied: 1
        }
    );
}

#[test]
fn malformed_directives() {
    assert_eq!(
        printc::try_compile("abc %z").unwrap_err().to_string(),
        "malformed format string - %z"
    );
    assert_eq!(
        printc::try_compile("%5%").unwrap_err(),
        FormatError::IllegalDirective { conversion: '%' }
    );
    assert_eq!(
        printc::try_compile("%**d").unwrap_err(),
        FormatError::WidthGivenTwice
    );
    assert!(printc::try_compile("%1$$d").unwrap_err().is_malformed());
    assert!(printc::try_compile("%-1$d").is_ok());
}

#[test]
fn argument_type_errors() {
    assert_eq!(
        printc::format("%d", &args![true]).unwrap_err(),
        FormatError::ArgumentType {
            value: "true".into(),
            target: CoercionTarget::Integer
        }
    );
    assert_eq!(
        printc::format("%f", &args![vec!["a"]]).unwrap_err().to_string(),
        "can't convert [\"a\"] into Float"
    );
    assert!(printc::format("%*s", &args![false, "x"]).is_err());
}

#[test]
fn oversized_dynamic_width() {
    let err = printc::format("%*d", &args![i64::from(i32::MAX) + 1, 1]).unwrap_err();
    assert_eq!(
        err,
        FormatError::WidthTooBig {
            width: i128::from(i32::MAX) + 1
        }
    );
    assert!(printc::format("%*d", &args![i32::MIN, 1]).is_err());
    assert_eq!(printc::format("%*d|", &args![-3, 1]).unwrap(), "1  |");
}

#[test]
fn poisoned_plan_error_is_stable() {
    let formatter = Formatter::new();
    let plan = formatter.compile("%d %z");
    let errors: Vec<_> = (0..3)
        .map(|n| formatter.apply(&plan, &args![n, n]).unwrap_err())
        .collect();
    assert!(errors.iter().all(|e| *e == errors[0]));
    // Compile errors win over the argument count.
    assert_eq!(formatter.apply(&plan, &[]).unwrap_err(), errors[0]);
    assert_eq!(formatter.cache().stats().compiles, 1);
}

#[test]
fn compile_never_fails() {
    for format in ["%z", "%s %1$s", "%**d", "%-%"] {
        assert!(printc::compile(format).is_poisoned(), "{format:?}");
    }
}
