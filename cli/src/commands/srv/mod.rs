//! # gwstyles Catalog Server
//!
//! File: cli/src/commands/srv/mod.rs
//!
//! ## Overview
//!
//! `gwstyles srv` serves the block style component catalog over HTTP for
//! local theme work: a browsable HTML tree with a filter box, plus JSON
//! endpoints for tooling. The catalog is rebuilt on every request, so
//! stylesheet edits appear on reload without restarting the server.
//!
//! ## Architecture
//!
//! - `config.rs`: argument parsing and `.gwstyles-srv.toml` merging
//! - `server_logic.rs`: the Axum router, port selection, and graceful shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Serve the configured theme on http://127.0.0.1:8000
//! gwstyles srv
//!
//! # Serve a stylesheet directory directly on all interfaces
//! gwstyles srv --dir ./css/block-style-components --host 0.0.0.0 --port 9000
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Handles configuration loading and merging for the catalog server.
pub mod config;

/// Contains the Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Loads the effective configuration and runs the server until shutdown.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let config = config::load_and_merge_config(args).await?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;
    Ok(())
}
