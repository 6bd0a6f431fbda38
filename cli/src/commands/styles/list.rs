//! # gwstyles Styles List Command
//!
//! File: cli/src/commands/styles/list.rs
//!
//! ## Overview
//!
//! Implements `gwstyles styles list`, which scans the theme's block style
//! component stylesheets and prints the resulting catalog as a tree, in
//! category priority order.
//!
//! ## Architecture
//!
//! 1. Resolve the stylesheet directory (`--dir`, `--theme`, env, or config)
//! 2. Run discovery over it
//! 3. Render the catalog with `utils::tree_printer` and print a summary line
//!
//! ## Examples
//!
//! ```bash
//! gwstyles styles list --theme ~/sites/web/themes/contrib/groundwork
//! ```
//!
//! Example output:
//!
//! ```
//! /home/user/sites/web/themes/contrib/groundwork/css/block-style-components/
//! ├── 🔲 Layout
//! │   └── grid: Grid helpers
//! │       └── gw-grid: Two column layout
//! └── 🎨 Colors
//!     └── brand
//!         └── gw-brand
//!
//! Found 2 component(s) in 2 file(s) across 2 category group(s).
//! ```
//!
//! A missing or empty directory is not an error; the command reports that
//! nothing was found and exits successfully. `--category` narrows the tree to
//! one category and fails if that category was not discovered.
//!
use super::utils::tree_printer;
use super::{discover_from_args, SourceArgs};
use crate::catalog::Catalog;
use crate::core::error::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::info;

/// # List Styles Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only show this category (exact label, e.g. "🎨 Colors").
    #[arg(long)]
    pub category: Option<String>,
}

/// Narrows `catalog` to one category, failing with the known labels if it is absent.
fn select_category(catalog: Catalog, label: &str) -> Result<Catalog> {
    match catalog.get(label) {
        Some(group) => Ok(Catalog::from_groups(vec![group.clone()])),
        None => anyhow::bail!(
            "Unknown category '{}'. Discovered categories: {}",
            label,
            catalog.labels().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// # Handle Styles List Command (`handle_list`)
///
/// Discovers the catalog and prints it as a tree.
///
/// ## Returns
///
/// * `Result<()>` - `Err` when configuration fails to load, no stylesheet
///   directory can be resolved, or `--category` names an undiscovered category.
pub async fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling styles list command...");
    let discovered = discover_from_args(&args.source)?;
    let catalog = match &args.category {
        Some(label) => select_category(discovered.catalog, label)?,
        None => discovered.catalog,
    };

    if catalog.is_empty() {
        println!(
            "No block style components found in '{}'.",
            discovered.style_dir.display()
        );
        return Ok(());
    }

    let root_label = format!(
        "{}/",
        discovered.style_dir.display().to_string().trim_end_matches('/')
    );
    let tree = tree_printer::render_catalog_tree(
        &catalog,
        &root_label,
        std::io::stdout().is_terminal(),
    )?;
    print!("{}", tree);
    println!(
        "\nFound {} component(s) in {} file(s) across {} category group(s).",
        catalog.component_count(),
        catalog.file_count(),
        catalog.categories().len()
    );
    Ok(())
}
