//! CLI module for QuoteDB
//!
//! Provides the command-line interface:
//! - serve: boot the store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments, set up logging, and run the selected command
pub fn run() -> CliResult<()> {
    init_tracing();
    run_command(Cli::parse_args())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quotedb=info,tower_http=info"));

    // Ignore the error when a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
