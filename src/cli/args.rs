//! CLI argument definitions using clap
//!
//! Commands:
//! - quotedb serve --host <host> --port <port>

use clap::{Parser, Subcommand};

/// QuoteDB - a small, in-memory quote service over HTTP
#[derive(Parser, Debug)]
#[command(name = "quotedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the QuoteDB HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
