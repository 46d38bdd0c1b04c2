//! Plan cache: one compiled plan per interned format string.
//!
//! Entries are `Arc<OnceLock<Plan>>` cells in a sharded `DashMap`. A lookup
//! holds a shard lock only long enough to clone the cell handle; compilation
//! runs afterwards inside `OnceLock::get_or_init`. Concurrent first requests
//! for one key therefore compile exactly once and never see a partial plan,
//! while requests for other keys in the same shard are not held up.
//!
//! Plans are never evicted. Poisoned plans are cached like usable ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use printc_ir::{FormatString, Plan};
use printc_plan::compile_plan;
use rustc_hash::FxBuildHasher;

type PlanCell = Arc<OnceLock<Plan>>;

/// Counters for a [`PlanCache`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    /// Lookups answered by an already-compiled plan.
    pub hits: u64,
    /// Compilations performed.
    pub compiles: u64,
}

/// Concurrent `FormatString -> Plan` map.
pub struct PlanCache {
    plans: DashMap<FormatString, PlanCell, FxBuildHasher>,
    hits: AtomicU64,
    compiles: AtomicU64,
}

impl PlanCache {
    pub fn new() -> Self {
        PlanCache {
            plans: DashMap::with_hasher(FxBuildHasher),
            hits: AtomicU64::new(0),
            compiles: AtomicU64::new(0),
        }
    }

    /// The plan for `key`, compiling `source` on first request.
    ///
    /// `source` must be the text `key` was interned from.
    pub fn get_or_compile(&self, key: FormatString, source: &str) -> Plan {
        let cell = self.cell(key);

        let mut compiled = false;
        let plan = cell
            .get_or_init(|| {
                compiled = true;
                compile_plan(source)
            })
            .clone();

        if compiled {
            self.compiles.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                ?key,
                poisoned = plan.is_poisoned(),
                "plan cache miss"
            );
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(?key, "plan cache hit");
        }
        plan
    }

    /// The plan for `key` if one has been compiled.
    pub fn get(&self, key: FormatString) -> Option<Plan> {
        self.plans
            .get(&key)
            .and_then(|cell| cell.value().get().cloned())
    }

    /// Clone the cell handle for `key`, inserting an empty cell if needed.
    /// No shard lock is held once this returns.
    fn cell(&self, key: FormatString) -> PlanCell {
        if let Some(cell) = self.plans.get(&key) {
            return Arc::clone(cell.value());
        }
        Arc::clone(self.plans.entry(key).or_default().value())
    }

    /// Number of cached format strings.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            compiles: self.compiles.load(Ordering::Relaxed),
        }
    }
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
