//! Printc planner: format string to `Plan`.
//!
//! # Pipeline Position
//!
//! ```text
//! format -> Scan -> **Plan** -> (cache) -> Bind -> Convert -> String
//! ```
//!
//! The planner interprets raw scanner directives: it parses flag sets,
//! assigns argument slots, fixes the numbering mode, applies precision
//! defaults and merges adjacent literal text. Everything it rejects is
//! memoized as a poisoned plan, so a bad format string is diagnosed once.

mod planner;

pub use planner::compile_plan;
