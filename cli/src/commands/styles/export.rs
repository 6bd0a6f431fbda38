//! # gwstyles Styles Export Command
//!
//! File: cli/src/commands/styles/export.rs
//!
//! ## Overview
//!
//! Implements `gwstyles styles export`, which writes the discovered catalog
//! either as pretty-printed JSON (the nested category → file → component
//! mapping, in display order) or as a standalone HTML page with one
//! collapsible section per category and file.
//!
//! Output goes to stdout unless `--output` names a file; parent directories
//! of the output file are created as needed.
//!
//! ## Examples
//!
//! ```bash
//! gwstyles styles export > styles.json
//! gwstyles styles export --format html --output build/styles.html
//! ```
//!
use super::{discover_from_args, SourceArgs};
use crate::catalog::{filter, Catalog};
use crate::common::fs::io;
use crate::core::error::{GwStylesError, Result};
use crate::core::templating::{self, PageOptions};
use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Output formats for `gwstyles styles export`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Html,
}

/// # Export Styles Arguments (`ExportArgs`)
#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Renders `catalog` in the requested format.
pub fn render_export(catalog: &Catalog, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(catalog)
                .map_err(|e| anyhow!(GwStylesError::Serialization { source: e }))?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Html => {
            templating::render_catalog_page(&filter::filter(catalog, ""), &PageOptions::default())
        }
    }
}

/// # Handle Styles Export Command (`handle_export`)
pub async fn handle_export(args: ExportArgs) -> Result<()> {
    info!("Handling styles export command ({:?})...", args.format);
    let discovered = discover_from_args(&args.source)?;
    let rendered = render_export(&discovered.catalog, args.format)?;

    match &args.output {
        Some(path) => {
            io::write_string_to_file(path, &rendered)
                .with_context(|| format!("Failed to write export to '{}'", path.display()))?;
            println!(
                "Exported {} component(s) to '{}'.",
                discovered.catalog.component_count(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
