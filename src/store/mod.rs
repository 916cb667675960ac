//! Item store
//!
//! Owns the on-disk collection of catalog items.
//!
//! # Design Principles
//!
//! - One JSON array document holds the whole collection
//! - Every read parses the full document
//! - Every append rewrites the full document (temp file + rename)
//! - Appends from this process are serialized; ids never repeat

mod errors;
mod file_store;
mod item;

pub use errors::{StoreError, StoreResult};
pub use file_store::FileStore;
pub use item::{Item, NewItem};
