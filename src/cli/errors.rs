//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use std::io;

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to create tokio runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("HTTP server failed: {0}")]
    Server(#[source] io::Error),
}
