//! # gwstyles Styles Search Command
//!
//! File: cli/src/commands/styles/search.rs
//!
//! ## Overview
//!
//! Implements `gwstyles styles search <QUERY>`. The query is applied the way
//! the admin style picker filters its options: case-insensitive substring
//! match on each component's label (its name followed by its description).
//! Matching components are printed as a tree (only files and categories that
//! contain a match are shown), followed by a match count.
//!
//! With `--json`, the command prints `{ "query", "matches", "catalog" }`
//! instead, the same body `GET /api/styles/search` returns.
//!
//! ## Examples
//!
//! ```bash
//! gwstyles styles search grid
//! gwstyles styles find "two column" --json
//! ```
//!
use super::utils::tree_printer;
use super::{discover_from_args, SourceArgs};
use crate::catalog::filter::{self, SearchSummary};
use crate::core::error::{GwStylesError, Result};
use anyhow::anyhow;
use clap::Parser;
use std::io::IsTerminal;
use tracing::info;

/// # Search Styles Arguments (`SearchArgs`)
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in component names and descriptions.
    pub query: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Styles Search Command (`handle_search`)
pub async fn handle_search(args: SearchArgs) -> Result<()> {
    info!("Handling styles search command for '{}'...", args.query);
    let discovered = discover_from_args(&args.source)?;
    let view = filter::filter(&discovered.catalog, &args.query);

    if args.json {
        let summary = SearchSummary::from(&view);
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| anyhow!(GwStylesError::Serialization { source: e }))?;
        println!("{}", json);
        return Ok(());
    }

    let matches = view.matches();
    if !matches.is_empty() {
        let tree = tree_printer::render_catalog_tree(
            &matches,
            &format!("Matches for '{}':", view.query),
            std::io::stdout().is_terminal(),
        )?;
        print!("{}", tree);
        println!();
    }
    println!("{} match(es) for '{}'.", view.match_count(), view.query);
    Ok(())
}
