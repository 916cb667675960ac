//! catalogd - item catalog service backed by a single JSON file
//!
//! - `store`: the on-disk collection (read-all, append-and-persist)
//! - `query`: case-insensitive name search and pagination
//! - `stats`: cached aggregate statistics
//! - `watcher`: data file polling that invalidates the stats cache
//! - `http_server`: axum routes over the above

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod stats;
pub mod store;
pub mod watcher;
