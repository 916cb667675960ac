//! Metrics registry for catalogd
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by the store, the stats cache and the watcher.
///
/// All counters use Relaxed atomics; exact cross-counter ordering is not needed.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Full collection reads from the data file
    store_loads: AtomicU64,
    /// Successful appends
    store_appends: AtomicU64,
    /// Stats served from the cached snapshot
    stats_hits: AtomicU64,
    /// Stats recomputed from the store
    stats_misses: AtomicU64,
    /// Stats cache invalidations
    stats_invalidations: AtomicU64,
    /// Data file changes seen by the watcher
    file_changes: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_store_loads(&self) {
        self.store_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_appends(&self) {
        self.store_appends.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_stats_hits(&self) {
        self.stats_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_stats_misses(&self) {
        self.stats_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_stats_invalidations(&self) {
        self.stats_invalidations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_file_changes(&self) {
        self.file_changes.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            store_loads: self.store_loads.load(Ordering::Relaxed),
            store_appends: self.store_appends.load(Ordering::Relaxed),
            stats_hits: self.stats_hits.load(Ordering::Relaxed),
            stats_misses: self.stats_misses.load(Ordering::Relaxed),
            stats_invalidations: self.stats_invalidations.load(Ordering::Relaxed),
            file_changes: self.file_changes.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub store_loads: u64,
    pub store_appends: u64,
    pub stats_hits: u64,
    pub stats_misses: u64,
    pub stats_invalidations: u64,
    pub file_changes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.store_loads, 0);
        assert_eq!(snapshot.stats_hits, 0);
        assert_eq!(snapshot.file_changes, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_store_loads();
        registry.increment_store_loads();
        registry.increment_store_appends();
        registry.increment_stats_hits();
        registry.increment_stats_misses();
        registry.increment_stats_invalidations();
        registry.increment_file_changes();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.store_loads, 2);
        assert_eq!(snapshot.store_appends, 1);
        assert_eq!(snapshot.stats_hits, 1);
        assert_eq!(snapshot.stats_misses, 1);
        assert_eq!(snapshot.stats_invalidations, 1);
        assert_eq!(snapshot.file_changes, 1);
    }

    #[test]
    fn test_snapshot_serializes_counter_names() {
        let registry = MetricsRegistry::new();
        registry.increment_stats_hits();

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(json["stats_hits"], 1);
        assert_eq!(json["store_loads"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        reg.increment_store_loads();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().store_loads, 800);
    }
}
