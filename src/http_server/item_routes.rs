//! Catalog HTTP Routes
//!
//! List/search/paginate, single-item lookup, creation and cached stats.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use crate::observability::MetricsRegistry;
use crate::query::{run_query, ListParams, PageRequest, QueryResult};
use crate::stats::{StatsCache, StatsSnapshot};
use crate::store::{FileStore, Item, NewItem};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
#[derive(Debug)]
pub struct CatalogState {
    pub store: Arc<FileStore>,
    pub stats: Arc<StatsCache>,
}

impl CatalogState {
    pub fn new(store: Arc<FileStore>, stats: Arc<StatsCache>) -> Self {
        Self { store, stats }
    }

    /// Build a store and an empty stats cache over `data_file`
    pub fn open(data_file: impl Into<PathBuf>, metrics: Arc<MetricsRegistry>) -> Self {
        let store = Arc::new(FileStore::open(data_file, metrics));
        let stats = Arc::new(StatsCache::new(Arc::clone(&store)));
        Self::new(store, stats)
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        self.store.metrics()
    }
}

// ==================
// Catalog Routes
// ==================

/// Create catalog routes
pub fn item_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route("/items/:id", get(get_item_handler))
        .route("/stats", get(stats_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_items_handler(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<QueryResult>> {
    let items = state.store.load_all().await?;
    let request = PageRequest::from_params(&params);
    Ok(Json(run_query(items, &request)))
}

async fn get_item_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Item>> {
    // An id that is not a number cannot match any item.
    let id: u64 = id.trim().parse().map_err(|_| ApiError::NotFound)?;
    let item = state.store.find(id).await?;
    Ok(Json(item))
}

async fn create_item_handler(
    State(state): State<Arc<CatalogState>>,
    Json(new_item): Json<NewItem>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let item = state.store.append(new_item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn stats_handler(State(state): State<Arc<CatalogState>>) -> ApiResult<Json<StatsSnapshot>> {
    let snapshot = state.stats.get().await?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_one_registry() {
        let metrics = Arc::new(MetricsRegistry::new());
        let state = CatalogState::open("items.json", Arc::clone(&metrics));

        assert!(Arc::ptr_eq(state.metrics(), &metrics));
        assert_eq!(state.store.path(), std::path::Path::new("items.json"));
    }
}
