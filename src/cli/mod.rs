//! CLI module for catalogd
//!
//! Provides command-line interface for:
//! - init: Create the data file
//! - serve: Run the HTTP server and change watcher
//! - stats: One-shot aggregate statistics

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve, stats};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
