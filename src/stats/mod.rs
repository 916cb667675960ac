//! Stats cache
//!
//! Aggregate `{totalItems, averagePrice}` over the collection, cached in
//! memory until the change watcher reports that the data file moved.

mod cache;
mod snapshot;

pub use cache::StatsCache;
pub use snapshot::StatsSnapshot;
