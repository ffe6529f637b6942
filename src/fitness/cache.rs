//! Memoization of subset fitness.

use crate::encoding::FeatureSubset;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Write-once map from [`FeatureSubset`] to fitness.
///
/// Many parameter vectors encode the same subset, so the expensive
/// `O(N^2)` cost evaluation runs once per distinct subset and every later
/// request returns the stored value bit for bit.
///
/// A cache belongs to exactly one (cost function, k) pair. It is never
/// invalidated; entries live as long as the cache.
///
/// With sequential evaluation the compute closure runs at most once per
/// key. When evaluations run concurrently two threads can miss on the same
/// key at once; both compute, the first insert wins, and both return the
/// stored value.
#[derive(Debug, Default)]
pub struct FitnessCache {
    entries: Mutex<FxHashMap<FeatureSubset, f64>>,
    capacity_limit: Option<usize>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl FitnessCache {
    /// Creates an empty, unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops storing new entries once `limit` subsets are cached.
    ///
    /// Misses past the limit are still computed and returned, only not
    /// remembered. Existing entries are never evicted.
    pub fn with_capacity_limit(mut self, limit: usize) -> Self {
        self.capacity_limit = Some(limit);
        self
    }

    /// Returns the cached fitness of `subset`, computing it on a miss.
    pub fn get_or_compute<F>(&self, subset: &FeatureSubset, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(&value) = self.lock().get(subset) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return value;
        }

        // Computed outside the lock so concurrent misses on other keys proceed.
        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute();

        let mut entries = self.lock();
        if let Some(&stored) = entries.get(subset) {
            return stored;
        }
        if self.capacity_limit.is_none_or(|limit| entries.len() < limit) {
            entries.insert(subset.clone(), value);
        }
        value
    }

    /// Cached fitness of `subset`, if present.
    pub fn get(&self, subset: &FeatureSubset) -> Option<f64> {
        self.lock().get(subset).copied()
    }

    /// Number of distinct subsets stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no subset has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that ran the compute closure.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<FeatureSubset, f64>> {
        // A panic inside `compute` never holds the lock, so poisoning only
        // follows a panic in map code; the map itself stays consistent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
