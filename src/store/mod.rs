//! Fold-State Store
//!
//! In-memory mapping from file to its latest snapshot, ordered by recency of
//! capture. Recency only decides eviction; lookups never touch it.

pub mod persistence;
pub mod portable;

use crate::tree::Snapshot;
use crate::types::FileKey;
use lru::LruCache;
use std::path::Path;
use tracing::debug;

/// Eviction runs once the ledger exceeds `max_history * EVICTION_SLACK`.
pub const EVICTION_SLACK: usize = 2;

/// Latest snapshot per file plus the recency ledger controlling eviction.
///
/// Map and ledger are one `LruCache`, so every key appears exactly once in both.
pub struct FoldStateStore {
    entries: LruCache<FileKey, Snapshot>,
    max_history: usize,
}

impl FoldStateStore {
    /// Create an empty store remembering at most `max_history` files.
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: LruCache::unbounded(),
            max_history: max_history.max(1),
        }
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `snapshot` as the latest for `key` and make `key` the most recent.
    ///
    /// An empty snapshot is ignored entirely: it neither replaces a previous
    /// entry nor touches recency.
    pub fn put(&mut self, key: FileKey, snapshot: Snapshot) {
        if snapshot.is_empty() {
            return;
        }
        self.entries.put(key, snapshot);
        if self.entries.len() > self.max_history.saturating_mul(EVICTION_SLACK) {
            self.evict();
        }
    }

    /// Look up without affecting recency
    pub fn get(&self, key: &Path) -> Option<&Snapshot> {
        self.entries.peek(key)
    }

    pub fn remove(&mut self, key: &Path) -> Option<Snapshot> {
        self.entries.pop(key)
    }

    /// Drop the oldest entries until at most `max_history` remain.
    pub fn evict(&mut self) {
        let mut evicted = 0usize;
        while self.entries.len() > self.max_history {
            if self.entries.pop_lru().is_none() {
                break;
            }
            evicted += 1;
        }
        if evicted > 0 {
            debug!(evicted, remaining = self.entries.len(), "Evicted fold-state entries");
        }
    }

    /// Entries from oldest to most recent
    pub fn iter(&self) -> impl Iterator<Item = (&FileKey, &Snapshot)> {
        self.entries.iter().rev()
    }

    /// Keys from oldest to most recent
    pub fn keys(&self) -> Vec<&FileKey> {
        self.iter().map(|(key, _)| key).collect()
    }
}
