//! # gwstyles Catalog Tree Printer
//!
//! File: cli/src/commands/styles/utils/tree_printer.rs
//!
//! ## Overview
//!
//! Renders a `Catalog` as a tree, in the style of the `tree` command-line
//! utility: categories at the first level, stylesheets below them, and
//! components as leaves. Used by `gwstyles styles list` and `gwstyles styles search`.
//!
//! Example output:
//!
//! ```
//! Block style components/
//! ├── 🔲 Layout
//! │   ├── stack: Stacks and flow
//! │   │   └── gw-stack: Vertical rhythm
//! │   └── grid
//! │       ├── gw-grid: Two column layout
//! │       └── gw-row
//! └── Uncategorized
//!     └── misc
//!         └── gw-misc
//! ```
//!
//! Category names are bolded with ANSI codes when `bold` is set (callers pass
//! `true` only when stdout is a terminal).
//!
use crate::catalog::Catalog;
use crate::core::error::Result;
use anyhow::anyhow;
use std::fmt::Write as FmtWrite;

// --- Constants for Tree Drawing ---

/// Connector for intermediate items ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";
/// ANSI escape code to start bold text formatting.
const BOLD_START: &str = "\x1b[1m";
/// ANSI escape code to reset text formatting.
const BOLD_END: &str = "\x1b[0m";

fn connector(is_last: bool) -> &'static str {
    if is_last {
        ELBOW
    } else {
        TEE
    }
}

fn continuation(is_last: bool) -> &'static str {
    if is_last {
        SPACER
    } else {
        PIPE
    }
}

/// `name: description`, or just `name` when the description is empty.
fn labelled(name: &str, description: &str) -> String {
    if description.is_empty() {
        name.to_string()
    } else {
        format!("{}: {}", name, description)
    }
}

/// # Render Catalog Tree (`render_catalog_tree`)
///
/// Builds the tree for `catalog` under a root line reading `root_label`.
///
/// ## Returns
///
/// * `Result<String>` - The tree, one entry per line, ending with a newline.
pub fn render_catalog_tree(catalog: &Catalog, root_label: &str, bold: bool) -> Result<String> {
    let mut output = String::new();
    write_tree(&mut output, catalog, root_label, bold)
        .map_err(|e| anyhow!(e).context("Failed to build catalog tree"))?;
    Ok(output)
}

fn write_tree(
    output: &mut dyn FmtWrite,
    catalog: &Catalog,
    root_label: &str,
    bold: bool,
) -> std::fmt::Result {
    let (start, end) = if bold { (BOLD_START, BOLD_END) } else { ("", "") };
    writeln!(output, "{}{}{}", start, root_label, end)?;

    let categories = catalog.categories();
    for (ci, group) in categories.iter().enumerate() {
        let last_category = ci + 1 == categories.len();
        writeln!(
            output,
            "{}{}{}{}",
            connector(last_category),
            start,
            group.label,
            end
        )?;
        let category_prefix = continuation(last_category);

        for (fi, file) in group.files.iter().enumerate() {
            let last_file = fi + 1 == group.files.len();
            writeln!(
                output,
                "{}{}{}",
                category_prefix,
                connector(last_file),
                labelled(&file.filename, &file.entry.description)
            )?;
            let file_prefix = format!("{}{}", category_prefix, continuation(last_file));

            let count = file.entry.components.len();
            for (i, (name, description)) in file.entry.components.iter().enumerate() {
                writeln!(
                    output,
                    "{}{}{}",
                    file_prefix,
                    connector(i + 1 == count),
                    labelled(name, description)
                )?;
            }
        }
    }
    Ok(())
}
