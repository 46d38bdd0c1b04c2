#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{ArgRef, Conversion, Flags, Width};

fn decimal_step(slot: usize) -> Step {
    Step::Convert(ConvertStep {
        directive: Directive {
            flags: Flags::empty(),
            arg_ref: ArgRef::Sequential,
            width: Width::None,
            precision: None,
            conversion: Conversion::SignedDecimal,
        },
        value_slot: slot,
        width_slot: None,
    })
}

#[test]
fn ready_plan_exposes_steps() {
    let plan = Plan::ready(
        vec![Step::Literal("n=".into()), decimal_step(0)],
        Some(0),
        NumberingMode::Sequential,
    );
    assert_eq!(plan.steps().len(), 2);
    assert_eq!(plan.conversion_count(), 1);
    assert_eq!(plan.required_arguments(), 1);
    assert!(!plan.is_poisoned());
    assert!(plan.check().is_ok());
}

#[test]
fn literal_only_plan_requires_nothing() {
    let plan = Plan::ready(vec![Step::Literal("hi".into())], None, NumberingMode::Sequential);
    assert_eq!(plan.required_arguments(), 0);
    assert_eq!(plan.max_argument_index(), None);
}

#[test]
fn poisoned_plan_returns_its_error() {
    let plan = Plan::poisoned(FormatError::WidthGivenTwice, NumberingMode::Sequential);
    assert!(plan.is_poisoned());
    assert!(plan.steps().is_empty());
    assert_eq!(plan.error(), Some(&FormatError::WidthGivenTwice));
    assert_eq!(plan.check().unwrap_err(), FormatError::WidthGivenTwice);
    // Same error on every check.
    assert_eq!(plan.check().unwrap_err(), FormatError::WidthGivenTwice);
}

#[test]
fn clones_share_allocation() {
    let plan = Plan::ready(vec![decimal_step(0)], Some(0), NumberingMode::Sequential);
    let clone = plan.clone();
    assert!(plan.ptr_eq(&clone));
}

#[test]
fn equal_contents_compare_equal_without_sharing() {
    let a = Plan::ready(vec![decimal_step(1)], Some(1), NumberingMode::Positional);
    let b = Plan::ready(vec![decimal_step(1)], Some(1), NumberingMode::Positional);
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
}
