//! # gwstyles Catalog Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//!
//! ## Overview
//!
//! Builds the effective configuration for `gwstyles srv` from:
//! 1. Command-line arguments (highest priority)
//! 2. `.gwstyles-srv.toml` in the current working directory (if present)
//! 3. Default values (lowest priority)
//!
//! The stylesheet directory and the discovery settings (category table,
//! extension matching) come from the regular gwstyles configuration, the
//! same way the `styles` commands resolve them.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! port = 9000
//! host = "0.0.0.0"
//! enable_cors = false
//! ```
//!
//! ```rust
//! let config = load_and_merge_config(args).await?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::catalog::StyleDiscoverer;
use crate::commands::styles::SourceArgs;
use crate::core::config as gw_config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the optional server settings file, looked up in the working directory.
const CONFIG_FILE_NAME: &str = ".gwstyles-srv.toml";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// # Server Arguments (`SrvArgs`)
///
/// Command-line arguments for `gwstyles srv`.
#[derive(Parser, Debug)]
pub struct SrvArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Port to listen on. The next free port is used if it is taken.
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind to.
    #[arg(long, default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Disable the permissive CORS layer.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Server Configuration (`ServerConfig`)
///
/// The settings the server runs with after merging every source.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    /// Stylesheet directory scanned on every request.
    pub style_dir: PathBuf,
    pub discoverer: StyleDiscoverer,
}

/// Contents of `.gwstyles-srv.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    host: Option<String>,
    enable_cors: Option<bool>,
}

/// # Load and Merge Configuration (`load_and_merge_config`)
///
/// Resolves the stylesheet directory from the gwstyles configuration, then
/// applies `.gwstyles-srv.toml` from the working directory beneath any
/// non-default command-line values.
///
/// ## Returns
///
/// * `Result<ServerConfig>` - `Err` when configuration cannot be loaded,
///   no stylesheet directory can be resolved, or the server file is invalid.
pub async fn load_and_merge_config(args: SrvArgs) -> Result<ServerConfig> {
    let cfg = gw_config::load_config().context("Failed to load gwstyles configuration")?;
    let style_dir =
        cfg.resolve_style_dir(args.source.dir.as_deref(), args.source.theme.as_deref())?;
    if !style_dir.is_dir() {
        warn!(
            "Stylesheet directory '{}' does not exist yet; the catalog will be empty until it does.",
            style_dir.display()
        );
    }

    let mut effective_config = ServerConfig::from_args(&args, style_dir, cfg.discoverer());

    let cwd = env::current_dir().context("Failed to get current working directory")?;
    if let Some(file_config) = load_config_from_dir(&cwd)? {
        effective_config.apply_file_config(&args, file_config);
    } else {
        debug!("No {} found. Using arguments.", CONFIG_FILE_NAME);
    }

    Ok(effective_config)
}

/// Reads `.gwstyles-srv.toml` from `search_dir`. A missing file is `Ok(None)`.
fn load_config_from_dir(search_dir: &Path) -> Result<Option<FileConfig>> {
    let config_path = search_dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        debug!("No config file found at {}", config_path.display());
        return Ok(None);
    }

    info!("Loading server settings from {}", config_path.display());
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let file_config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    Ok(Some(file_config))
}

impl ServerConfig {
    fn from_args(args: &SrvArgs, style_dir: PathBuf, discoverer: StyleDiscoverer) -> Self {
        Self {
            port: args.port,
            host: args.host,
            enable_cors: !args.no_cors,
            style_dir,
            discoverer,
        }
    }

    /// File values replace settings the command line left at their defaults.
    fn apply_file_config(&mut self, args: &SrvArgs, file_config: FileConfig) {
        if args.port == DEFAULT_PORT {
            if let Some(port) = file_config.port {
                self.port = port;
            }
        }
        if args.host == DEFAULT_HOST {
            if let Some(host_str) = file_config.host {
                match host_str.parse() {
                    Ok(host) => self.host = host,
                    Err(e) => warn!(
                        "Invalid host IP '{}' in {} ({}), using {}",
                        host_str, CONFIG_FILE_NAME, e, self.host
                    ),
                }
            }
        }
        if !args.no_cors {
            if let Some(enable_cors) = file_config.enable_cors {
                self.enable_cors = enable_cors;
            }
        }
    }
}
