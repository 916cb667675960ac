//! # Catalog HTTP Server Module
//!
//! Axum server exposing the item catalog.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `<prefix>/items` - List, search, paginate (GET) and create (POST)
//! - `<prefix>/items/:id` - Single item
//! - `<prefix>/stats` - Cached aggregate statistics
//! - `<prefix>/metrics` - Counter metrics

pub mod config;
pub mod errors;
pub mod item_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use item_routes::{item_routes, CatalogState};
pub use server::HttpServer;
