//! Sharded interner for format strings.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access
//! via per-shard locking. Interned strings are leaked: a format string, once
//! seen, lives for the rest of the process, as do the plans cached under it.

use super::FormatString;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Shard exceeded its 28-bit local index space.
    #[error("interner shard {shard_idx} exceeded capacity: {count} strings, max is {max}", max = FormatString::MAX_LOCAL)]
    ShardOverflow { shard_idx: usize, count: usize },
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Lookups of already-interned strings take only a
/// read lock on one shard, so hot-path formatting never contends on a
/// global lock.
pub struct StringInterner {
    shards: [RwLock<InternShard>; FormatString::NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        // Start with 1 for the empty string pre-interned in shard 0
        Self {
            shards,
            total_count: AtomicUsize::new(1),
        }
    }

    /// Compute shard for a string based on its hash.
    ///
    /// The empty string must land in shard 0 where it is pre-interned; the
    /// hash of no bytes is 0, so it does.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(16) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % FormatString::NUM_SHARDS
    }

    /// Try to intern a string, returning its handle or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<FormatString, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        // Fast path: check if already interned
        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s) {
                return Ok(FormatString::new(shard_idx_u32, local));
            }
        }

        // Slow path: need to insert
        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(FormatString::new(shard_idx_u32, local));
        }

        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&local| local <= FormatString::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: guard.strings.len(),
            })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(FormatString::new(shard_idx_u32, local))
    }

    /// Intern a string, returning its handle.
    ///
    /// # Panics
    /// Panics if a shard exceeds 2^28 strings. Use `try_intern` for fallible
    /// interning.
    #[inline]
    pub fn intern(&self, s: &str) -> FormatString {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the text of an interned format string.
    ///
    /// The returned reference is `'static` because interned strings are
    /// never deallocated.
    pub fn lookup(&self, fs: FormatString) -> &'static str {
        let shard = &self.shards[fs.shard()];
        let guard = shard.read();
        guard.strings[fs.local()]
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
