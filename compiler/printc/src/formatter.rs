//! `Formatter`: interner, plan cache and float renderer bundled together.

use printc_eval::{CFloatRenderer, FloatRenderer, Value};
use printc_ir::{FormatError, FormatString, Plan, StringInterner};
use printc_plan::compile_plan;

use crate::cache::PlanCache;

/// Compiles, caches and applies format strings.
///
/// A `Formatter` is `Sync`; one instance is meant to be shared by every
/// thread that formats. The free functions in this crate use a process-wide
/// instance with the default [`CFloatRenderer`].
pub struct Formatter {
    interner: StringInterner,
    cache: PlanCache,
    floats: Box<dyn FloatRenderer>,
}

impl Formatter {
    pub fn new() -> Self {
        Self::with_float_renderer(CFloatRenderer)
    }

    /// A formatter whose `f e E g G` output comes from `floats`.
    pub fn with_float_renderer(floats: impl FloatRenderer + 'static) -> Self {
        Formatter {
            interner: StringInterner::new(),
            cache: PlanCache::new(),
            floats: Box::new(floats),
        }
    }

    /// The cached plan for `format`, compiling it on first use.
    ///
    /// Never fails; a malformed format gives a poisoned plan.
    pub fn compile(&self, format: &str) -> Plan {
        match self.interner.try_intern(format) {
            Ok(key) => self.cache.get_or_compile(key, format),
            Err(error) => {
                tracing::warn!(%error, "format string not interned; compiling uncached");
                compile_plan(format)
            }
        }
    }

    /// Like [`compile`](Self::compile), surfacing a compile error eagerly.
    pub fn try_compile(&self, format: &str) -> Result<Plan, FormatError> {
        let plan = self.compile(format);
        plan.check()?;
        Ok(plan)
    }

    pub fn apply(&self, plan: &Plan, args: &[Value]) -> Result<String, FormatError> {
        printc_eval::apply(plan, args, &*self.floats)
    }

    /// Compile (or fetch) `format` and apply it to `args`.
    pub fn format(&self, format: &str, args: &[Value]) -> Result<String, FormatError> {
        let plan = self.compile(format);
        self.apply(&plan, args)
    }

    /// Intern `format` without compiling it.
    pub fn intern(&self, format: &str) -> FormatString {
        self.interner.intern(format)
    }

    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
