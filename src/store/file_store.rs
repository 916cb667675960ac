//! JSON file backed item store
//!
//! The whole collection is the unit of I/O: every read parses the full file
//! and every append rewrites it. Appends within this process are serialized
//! by an async mutex; other processes editing the file are not coordinated.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::errors::{StoreError, StoreResult};
use super::item::{Item, NewItem};
use crate::observability::MetricsRegistry;

/// Item store over a single JSON array document
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
    metrics: Arc<MetricsRegistry>,
}

impl FileStore {
    /// Create a store for the given data file. Nothing is read until first use.
    pub fn open(path: impl Into<PathBuf>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            metrics,
        }
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Create the data file holding an empty array if it does not exist.
    ///
    /// Returns `true` when a new file was written.
    pub async fn initialize(&self) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::unavailable(&self.path, e))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::persist_failed(&self.path, e))?;
        }

        self.persist(&[]).await?;
        info!(path = %self.path.display(), "created empty data file");
        Ok(true)
    }

    /// Read and parse the full collection
    pub async fn load_all(&self) -> StoreResult<Vec<Item>> {
        self.metrics.increment_store_loads();

        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| StoreError::unavailable(&self.path, e))?;
        let items: Vec<Item> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::corrupt(&self.path, e))?;

        debug!(path = %self.path.display(), items = items.len(), "loaded collection");
        Ok(items)
    }

    /// Look up a single item by id
    pub async fn find(&self, id: u64) -> StoreResult<Item> {
        self.load_all()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new item and persist the whole collection.
    ///
    /// Either the full collection including the new item is written, or the
    /// error is returned and the file keeps its previous content.
    pub async fn append(&self, new_item: NewItem) -> StoreResult<Item> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load_all().await?;
        let id = next_id(&items, now_millis());
        let item = new_item.into_item(id);
        items.push(item.clone());

        self.persist(&items).await?;
        self.metrics.increment_store_appends();

        info!(id = item.id, name = %item.name, total = items.len(), "appended item");
        Ok(item)
    }

    /// Write the collection to a sibling temp file and rename it into place.
    async fn persist(&self, items: &[Item]) -> StoreResult<()> {
        let body =
            serde_json::to_vec_pretty(items).map_err(|e| StoreError::persist_failed(&self.path, e))?;

        let tmp_path = self.temp_path();
        if let Err(e) = fs::write(&tmp_path, &body).await {
            return Err(StoreError::persist_failed(&self.path, e));
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
            }
            return Err(StoreError::persist_failed(&self.path, e));
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("items.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Time-derived id, forced above every id already in the collection.
fn next_id(items: &[Item], now_ms: u64) -> u64 {
    let max_existing = items.iter().map(|item| item.id).max().unwrap_or(0);
    now_ms.max(max_existing.saturating_add(1))
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
