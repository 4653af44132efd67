//! CLI command implementations

use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig, QuoteState};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed CLI invocation
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { host, port } => serve(&host, port),
    }
}

/// Boot the store and serve HTTP until the process is stopped.
///
/// 1. Build the server config from CLI flags
/// 2. Create an empty quote store
/// 3. Start the async runtime and run the Axum server
pub fn serve(host: &str, port: u16) -> CliResult<()> {
    let config = HttpServerConfig {
        host: host.to_string(),
        port,
        ..Default::default()
    };

    let state = Arc::new(QuoteState::new());
    let server = HttpServer::with_state(config, state);

    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;

    rt.block_on(async { server.start().await.map_err(CliError::Server) })
}
