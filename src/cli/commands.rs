//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::info;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;
use crate::http_server::{CatalogState, HttpServer};
use crate::observability::{init_tracing, MetricsRegistry};
use crate::store::FileStore;
use crate::watcher::ChangeWatcher;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Stats { config } => stats(&config),
    }
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create the data file with an empty collection.
///
/// Fails if the file already exists; existing data is never overwritten.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = FileStore::open(config.data_path(), Arc::new(MetricsRegistry::new()));

    let created = runtime()?.block_on(store.initialize())?;
    if !created {
        return Err(CliError::already_initialized(&config.data_file));
    }

    write_response(serde_json::json!({ "data_file": config.data_file }))
}

/// Start the HTTP server and, if enabled, the change watcher.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    if !config.data_path().exists() {
        return Err(CliError::not_initialized(&config.data_file));
    }

    init_tracing();

    runtime()?.block_on(async {
        let metrics = Arc::new(MetricsRegistry::new());
        let state = Arc::new(CatalogState::open(config.data_path(), metrics.clone()));

        let _watcher = if config.watch_enabled {
            let watcher = ChangeWatcher::new(config.data_path(), config.watch_interval(), metrics);
            info!(
                path = %config.data_file,
                interval_ms = config.watch_interval_ms,
                "watching data file"
            );
            Some(watcher.spawn(Arc::clone(&state.stats)))
        } else {
            None
        };

        HttpServer::with_config(config.http.clone(), state)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Compute the statistics once and print them.
pub fn stats(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let state = CatalogState::open(config.data_path(), Arc::new(MetricsRegistry::new()));

    let snapshot = runtime()?.block_on(state.stats.get())?;

    write_response(serde_json::to_value(snapshot)?)
}
