//! Remember prepared labels
//!
//! Live previews re-prepare the same title on every keystroke. The label
//! cache maps input text to the pipeline's output so repeated labels skip
//! the stages entirely. Each pipeline owns its cache, so the key is the
//! text alone.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default number of labels kept per pipeline
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded LRU of prepared labels with hit/miss accounting
pub struct LabelCache {
    entries: Mutex<LruCache<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LabelCache {
    /// Create a cache holding up to `capacity` labels
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a prepared label, counting the hit or miss
    pub fn get(&self, text: &str) -> Option<String> {
        let found = self.entries.lock().get(text).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Store a prepared label, evicting the least recently used one if full
    pub fn insert(&self, text: String, prepared: String) {
        self.entries.lock().put(text, prepared);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        CacheStats {
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

/// Thread-safe label cache handle
pub type SharedLabelCache = Arc<LabelCache>;
