//! # gwstyles Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `gwstyles` CLI, which discovers the block style
//! components declared in a Groundwork theme's stylesheets. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `catalog`: comment scanning, tag parsing, ordering, and filtering
//! - `commands`: the `styles` and `srv` command groups
//! - `core`: configuration, errors, and HTML rendering
//! - `common`: filesystem helpers
//!
//! All errors propagate up to `main`, which logs them and exits with status 1.
//!
//! ## Examples
//!
//! ```bash
//! gwstyles --help
//! gwstyles -vv styles list --theme ~/sites/web/themes/contrib/groundwork
//! gwstyles srv --port 9000
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod catalog; // Stylesheet discovery and the catalog model
mod commands; // Command definitions and handlers
mod common; // Shared filesystem utilities
mod core; // Core infrastructure (errors, config, templating)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "gwstyles",
    about = "🎨 gwstyles: Block style components for Groundwork themes",
    long_about = "Discover the block style components declared in a theme's stylesheets,\n\
                  then list, export, search, or serve them.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Inspect the theme's block style components.
    #[command(alias = "s")]
    Styles(commands::styles::StylesArgs),
    /// Serve the catalog over HTTP.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Styles(args) => commands::styles::handle_styles(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
