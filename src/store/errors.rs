//! Item store error types
//!
//! Error codes:
//! - CATALOG_STORE_UNAVAILABLE: backing file missing or unreadable
//! - CATALOG_CORRUPT_DATA: backing file is not a JSON array of items
//! - CATALOG_PERSIST_FAILED: the rewritten collection could not be stored
//! - CATALOG_NOT_FOUND: no item with the requested id

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Item store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file {path} is unavailable: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file {path} does not hold a valid item array: {source}")]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to persist {path}: {reason}")]
    PersistFailed { path: PathBuf, reason: String },

    #[error("item {0} not found")]
    NotFound(u64),
}

impl StoreError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CorruptData {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn persist_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::PersistFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::StoreUnavailable { .. } => "CATALOG_STORE_UNAVAILABLE",
            StoreError::CorruptData { .. } => "CATALOG_CORRUPT_DATA",
            StoreError::PersistFailed { .. } => "CATALOG_PERSIST_FAILED",
            StoreError::NotFound(_) => "CATALOG_NOT_FOUND",
        }
    }

    /// Whether this error is a lookup miss rather than a store failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
