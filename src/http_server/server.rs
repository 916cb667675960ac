//! # HTTP Server
//!
//! Combines the catalog, metrics and health routers behind CORS and request
//! tracing layers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::config::HttpServerConfig;
use super::item_routes::{item_routes, CatalogState};
use super::observability_routes::{health_routes, observability_routes};

/// HTTP server for the item catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, state: Arc<CatalogState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<CatalogState>) -> Router {
        let metrics = Arc::clone(state.metrics());
        let api = item_routes(state).merge(observability_routes(metrics));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = Router::new().merge(health_routes());
        let router = if config.api_prefix.is_empty() {
            router.merge(api)
        } else {
            router.nest(&config.api_prefix, api)
        };

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until ctrl-c or SIGTERM
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(
            %addr,
            prefix = %self.config.api_prefix,
            "catalog HTTP server listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::MetricsRegistry;

    fn state() -> Arc<CatalogState> {
        Arc::new(CatalogState::open("items.json", Arc::new(MetricsRegistry::new())))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(state());
        assert_eq!(server.socket_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, state());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_and_without_prefix() {
        let _prefixed = HttpServer::new(state()).router();
        let _root = HttpServer::with_config(HttpServerConfig::default().without_prefix(), state())
            .router();
    }
}
