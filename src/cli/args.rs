//! CLI argument definitions using clap
//!
//! Commands:
//! - catalogd init --config <path>
//! - catalogd serve --config <path> [--port <port>]
//! - catalogd stats --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// catalogd - item catalog service backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "catalogd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data file with an empty collection
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogd.json")]
        config: PathBuf,
    },

    /// Start the HTTP server and the change watcher
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogd.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the aggregate statistics once and exit
    Stats {
        /// Path to configuration file
        #[arg(long, default_value = "./catalogd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
