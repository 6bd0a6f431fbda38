//! # gwstyles Styles Command Group
//!
//! File: cli/src/commands/styles/mod.rs
//!
//! ## Overview
//!
//! `gwstyles styles <subcommand>` inspects the block style components of a theme:
//!
//! - `list`: print the catalog as a tree
//! - `export`: write the catalog as JSON or HTML
//! - `search`: show the components matching a query
//!
//! Every subcommand accepts the same source flags. `--dir` names the
//! stylesheet directory directly; `--theme` (or `GWSTYLES_THEME`) names the
//! theme root, and the configured `components_dir` is appended to it.
//!
//! ## Examples
//!
//! ```bash
//! gwstyles styles list --theme ~/sites/web/themes/contrib/groundwork
//! gwstyles styles export --format json --output styles.json
//! gwstyles styles search spacing
//! ```
//!
use crate::catalog::Catalog;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// Contains the handler and arguments for `gwstyles styles export`.
mod export;
/// Contains the handler and arguments for `gwstyles styles list`.
mod list;
/// Contains the handler and arguments for `gwstyles styles search`.
mod search;
/// Terminal rendering helpers shared by the subcommands.
pub mod utils;

/// # Styles Command Group Arguments (`StylesArgs`)
#[derive(Parser, Debug)]
pub struct StylesArgs {
    #[command(subcommand)]
    command: StylesCommand,
}

/// # Styles Subcommands (`StylesCommand`)
#[derive(Subcommand, Debug)]
enum StylesCommand {
    /// Print the discovered catalog as a tree.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Write the catalog as JSON or HTML.
    Export(export::ExportArgs),
    /// Show components whose name or description matches a query.
    #[command(alias = "find")]
    Search(search::SearchArgs),
}

/// Flags that locate the stylesheet directory. Shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Stylesheet directory to scan, used as-is. Takes precedence over `--theme`.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Theme root directory; the configured components directory is appended.
    #[arg(long, env = "GWSTYLES_THEME")]
    pub theme: Option<PathBuf>,
}

/// The outcome of a discovery run for a command.
pub struct Discovered {
    pub style_dir: PathBuf,
    pub catalog: Catalog,
}

/// Loads configuration, resolves the stylesheet directory, and runs discovery.
pub fn discover_from_args(source: &SourceArgs) -> Result<Discovered> {
    let cfg = config::load_config().context("Failed to load gwstyles configuration")?;
    let style_dir = cfg.resolve_style_dir(source.dir.as_deref(), source.theme.as_deref())?;
    debug!("Resolved style directory: {}", style_dir.display());
    let catalog = cfg.discoverer().discover(&style_dir);
    Ok(Discovered {
        style_dir,
        catalog,
    })
}

/// # Handle Styles Command (`handle_styles`)
///
/// Dispatches to the selected subcommand handler.
pub async fn handle_styles(args: StylesArgs) -> Result<()> {
    match args.command {
        StylesCommand::List(args) => list::handle_list(args).await?,
        StylesCommand::Export(args) => export::handle_export(args).await?,
        StylesCommand::Search(args) => search::handle_search(args).await?,
    }
    Ok(())
}
