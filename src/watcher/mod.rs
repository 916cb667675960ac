//! Change watcher
//!
//! Detects mutation of the data file, whether by this process or by any
//! other, and clears the stats cache. Detection is by polling the file's
//! modification time and length at a fixed interval.

mod poller;

pub use poller::{ChangeWatcher, FileStamp, WatcherHandle};

use std::time::Duration;

/// Default polling interval, matching the classic stat-polling default
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5007);
