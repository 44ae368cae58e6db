//! Per-node cache of compiled comparisons.
//!
//! Entries are keyed by node identity. Each entry keeps its node alive, so
//! a key address cannot be reused by a different node while it is cached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use xtree_ir::ComparisonExpr;

use super::{compile_comparison, CompiledComparison};

struct CacheEntry {
    node: Arc<ComparisonExpr>,
    compiled: CompiledComparison,
}

/// Hit and miss counters of a [`CompileCache`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Thread-safe cache mapping comparison nodes to their compiled form.
///
/// Each node is compiled at most once, however many threads ask for it.
#[derive(Default)]
pub struct CompileCache {
    entries: RwLock<FxHashMap<usize, CacheEntry>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CompileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled form of `node`, compiling it on first request.
    pub fn get_or_compile(&self, node: &Arc<ComparisonExpr>) -> CompiledComparison {
        let key = Self::key(node);

        // Fast path: already compiled
        {
            let guard = self.entries.read();
            if let Some(entry) = guard.get(&key) {
                if Arc::ptr_eq(&entry.node, node) {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    tracing::trace!(key, "compile cache hit");
                    return entry.compiled.clone();
                }
            }
        }

        let mut guard = self.entries.write();

        // Double-check after acquiring write lock
        if let Some(entry) = guard.get(&key) {
            if Arc::ptr_eq(&entry.node, node) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return entry.compiled.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(key, "compile cache miss");
        let compiled = compile_comparison(node);
        guard.insert(
            key,
            CacheEntry {
                node: Arc::clone(node),
                compiled: compiled.clone(),
            },
        );
        compiled
    }

    /// Number of cached nodes.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry, releasing the cached nodes. Counters are kept.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn key(node: &Arc<ComparisonExpr>) -> usize {
        Arc::as_ptr(node) as usize
    }
}

impl std::fmt::Debug for CompileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompileCache")
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
