//! Modification-stamp polling of the data file

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::observability::MetricsRegistry;
use crate::stats::StatsCache;

/// Observable identity of the data file between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl FileStamp {
    /// Stat the file; `None` when it does not exist or cannot be stat'ed.
    pub async fn read(path: &Path) -> Option<Self> {
        let meta = tokio::fs::metadata(path).await.ok()?;
        Some(Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// Polls the data file and reports each observed change once.
#[derive(Debug)]
pub struct ChangeWatcher {
    path: PathBuf,
    interval: Duration,
    metrics: Arc<MetricsRegistry>,
    /// `None` until the first poll has recorded a baseline
    last_seen: Option<Option<FileStamp>>,
}

impl ChangeWatcher {
    pub fn new(path: impl Into<PathBuf>, interval: Duration, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            path: path.into(),
            interval,
            metrics,
            last_seen: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stat the file once.
    ///
    /// Returns `true` when the stamp differs from the previous poll. The
    /// first poll only records a baseline and returns `false`. A file that
    /// appears or disappears counts as a change.
    pub async fn poll(&mut self) -> bool {
        let current = FileStamp::read(&self.path).await;

        match self.last_seen.replace(current) {
            None => {
                debug!(path = %self.path.display(), "recorded data file baseline");
                false
            }
            Some(previous) if previous == current => false,
            Some(_) => {
                self.metrics.increment_file_changes();
                info!(path = %self.path.display(), "data file changed");
                true
            }
        }
    }

    /// Run the polling loop on the tokio runtime, invalidating `cache` once
    /// per detected change.
    pub fn spawn(mut self, cache: Arc<StatsCache>) -> WatcherHandle {
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if self.poll().await {
                    cache.invalidate().await;
                }
            }
        });

        WatcherHandle { task }
    }
}

/// Handle to a running watcher task. Dropping it stops the task.
#[derive(Debug)]
pub struct WatcherHandle {
    task: JoinHandle<()>,
}

impl WatcherHandle {
    /// Stop polling
    pub fn shutdown(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
