//! Query engine
//!
//! Pure functions over an already loaded collection: case-insensitive
//! name search followed by 1-based page/limit slicing. No I/O and no error
//! conditions.

mod paginate;
mod params;

pub use paginate::{run_query, QueryResult};
pub use params::{ListParams, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
