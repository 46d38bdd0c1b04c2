//! Compiled format plans.
//!
//! A [`Plan`] is the immutable, ordered list of steps a format string
//! compiles to. It is shared behind an `Arc`, so cloning is a reference
//! count bump and every clone observes the same steps.
//!
//! A plan whose compilation failed is *poisoned*: it carries the compile
//! error instead of steps, and applying it yields that error every time.

use std::sync::Arc;

use crate::{Directive, FormatError};

/// Argument numbering discipline of a format string, fixed at compile time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NumberingMode {
    /// Only sequential references (also reported when no argument is used).
    #[default]
    Sequential,
    /// Only `N$` references.
    Positional,
    /// Both styles appeared; the plan is poisoned.
    Conflict,
}

/// A conversion step with its argument slots resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConvertStep {
    pub directive: Directive,
    /// Zero-based index of the value argument.
    pub value_slot: usize,
    /// Zero-based index of the `*` width argument, if any.
    pub width_slot: Option<usize>,
}

/// One step of a plan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Text emitted verbatim.
    Literal(Box<str>),
    Convert(ConvertStep),
}

#[derive(Debug, PartialEq, Eq)]
struct PlanData {
    steps: Box<[Step]>,
    max_argument_index: Option<usize>,
    numbering_mode: NumberingMode,
    error: Option<FormatError>,
}

/// Compiled, immutable format plan.
///
/// Equality compares contents; use [`Plan::ptr_eq`] to check that two
/// handles are the same cached plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan(Arc<PlanData>);

impl Plan {
    /// A usable plan.
    pub fn ready(
        steps: Vec<Step>,
        max_argument_index: Option<usize>,
        numbering_mode: NumberingMode,
    ) -> Self {
        Plan(Arc::new(PlanData {
            steps: steps.into_boxed_slice(),
            max_argument_index,
            numbering_mode,
            error: None,
        }))
    }

    /// A plan that fails with `error` whenever it is applied.
    pub fn poisoned(error: FormatError, numbering_mode: NumberingMode) -> Self {
        debug_assert!(error.is_compile_error(), "only compile errors poison a plan");
        Plan(Arc::new(PlanData {
            steps: Box::default(),
            max_argument_index: None,
            numbering_mode,
            error: Some(error),
        }))
    }

    /// The steps to execute; empty for a poisoned plan.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.0.steps
    }

    /// Highest zero-based argument slot referenced, counting `*` widths.
    #[inline]
    pub fn max_argument_index(&self) -> Option<usize> {
        self.0.max_argument_index
    }

    /// Minimum argument count this plan accepts.
    #[inline]
    pub fn required_arguments(&self) -> usize {
        self.0.max_argument_index.map_or(0, |max| max + 1)
    }

    #[inline]
    pub fn numbering_mode(&self) -> NumberingMode {
        self.0.numbering_mode
    }

    /// The memoized compile error of a poisoned plan.
    #[inline]
    pub fn error(&self) -> Option<&FormatError> {
        self.0.error.as_ref()
    }

    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.0.error.is_some()
    }

    /// `Ok(self)` for a usable plan, the memoized error otherwise.
    pub fn check(&self) -> Result<&Plan, FormatError> {
        match &self.0.error {
            Some(error) => Err(error.clone()),
            None => Ok(self),
        }
    }

    /// Whether both handles point at the same plan allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Plan) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of conversion steps.
    pub fn conversion_count(&self) -> usize {
        self.steps()
            .iter()
            .filter(|step| matches!(step, Step::Convert(_)))
            .count()
    }
}

#[cfg(test)]
mod tests;
