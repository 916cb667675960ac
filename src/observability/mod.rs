//! Observability for catalogd
//!
//! - Structured logging through `tracing`
//! - Counter metrics shared across subsystems
//!
//! # Usage
//!
//! ```ignore
//! use catalogd::observability::{init_tracing, MetricsRegistry};
//!
//! init_tracing();
//! let metrics = std::sync::Arc::new(MetricsRegistry::new());
//! metrics.increment_store_loads();
//! ```

mod metrics;

pub use metrics::{MetricsRegistry, MetricsSnapshot};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "catalogd=info,tower_http=info";

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
