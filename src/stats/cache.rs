//! Cached statistics snapshot
//!
//! Two states: `Empty` and `Populated`. A read in `Empty` loads the
//! collection, computes the snapshot and populates; a read in `Populated`
//! performs no I/O. `invalidate` always returns to `Empty`.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::snapshot::StatsSnapshot;
use crate::store::{FileStore, StoreResult};

#[derive(Debug, Clone, Copy, PartialEq)]
enum CacheState {
    Empty,
    Populated(StatsSnapshot),
}

/// Owner of the cached statistics snapshot.
///
/// `get` and `invalidate` are serialized on one async mutex, so an
/// invalidation arriving during a recompute is applied after it and is
/// never lost.
#[derive(Debug)]
pub struct StatsCache {
    store: Arc<FileStore>,
    state: Mutex<CacheState>,
}

impl StatsCache {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self {
            store,
            state: Mutex::new(CacheState::Empty),
        }
    }

    /// Return the cached snapshot, recomputing it if the cache is empty.
    ///
    /// On a store failure the error is returned and the cache stays empty.
    pub async fn get(&self) -> StoreResult<StatsSnapshot> {
        let mut state = self.state.lock().await;
        let metrics = self.store.metrics();

        if let CacheState::Populated(snapshot) = *state {
            metrics.increment_stats_hits();
            debug!("serving stats from cache");
            return Ok(snapshot);
        }

        metrics.increment_stats_misses();
        let items = self.store.load_all().await?;
        let snapshot = StatsSnapshot::compute(&items);
        *state = CacheState::Populated(snapshot);

        info!(
            total_items = snapshot.total_items,
            average_price = snapshot.average_price,
            "computed stats"
        );
        Ok(snapshot)
    }

    /// Discard any cached snapshot. Idempotent.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        *state = CacheState::Empty;
        self.store.metrics().increment_stats_invalidations();
        debug!("stats cache invalidated");
    }

    /// Whether a snapshot is currently cached
    pub async fn is_populated(&self) -> bool {
        matches!(*self.state.lock().await, CacheState::Populated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MetricsRegistry;
    use tempfile::TempDir;

    async fn cache_over(contents: Option<&str>) -> (TempDir, StatsCache) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        if let Some(contents) = contents {
            tokio::fs::write(&path, contents).await.unwrap();
        }
        let store = Arc::new(FileStore::open(path, Arc::new(MetricsRegistry::new())));
        (dir, StatsCache::new(store))
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let (_dir, cache) = cache_over(Some(
            r#"[{"id":1,"name":"Widget A","price":10},{"id":2,"name":"Widget B","price":20}]"#,
        ))
        .await;

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert_eq!(first, second);
        let metrics = cache.store.metrics().snapshot();
        assert_eq!(metrics.store_loads, 1);
        assert_eq!(metrics.stats_hits, 1);
        assert_eq!(metrics.stats_misses, 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let (_dir, cache) = cache_over(Some(r#"[{"id":1,"name":"A","price":4}]"#)).await;

        cache.get().await.unwrap();
        cache.invalidate().await;
        cache.invalidate().await;
        assert!(!cache.is_populated().await);

        cache.get().await.unwrap();
        assert_eq!(cache.store.metrics().snapshot().store_loads, 2);
    }

    #[tokio::test]
    async fn test_failure_leaves_cache_empty() {
        let (_dir, cache) = cache_over(None).await;

        let err = cache.get().await.unwrap_err();
        assert_eq!(err.code(), "CATALOG_STORE_UNAVAILABLE");
        assert!(!cache.is_populated().await);
    }

    #[tokio::test]
    async fn test_corrupt_file_propagates() {
        let (_dir, cache) = cache_over(Some("{not json")).await;

        let err = cache.get().await.unwrap_err();
        assert_eq!(err.code(), "CATALOG_CORRUPT_DATA");
        assert!(!cache.is_populated().await);
    }
}
