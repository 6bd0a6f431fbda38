//! # gwstyles Styles Utilities
//!
//! File: cli/src/commands/styles/utils/mod.rs
//!
//! ## Overview
//!
//! Helpers shared by the `gwstyles styles` subcommands.
//!
//! - `tree_printer`: renders a catalog as a `tree`-style listing for the terminal.
//!
//! ```rust
//! use crate::commands::styles::utils::tree_printer;
//!
//! let tree = tree_printer::render_catalog_tree(&catalog, "Block style components/", false)?;
//! ```
//!

/// # Tree Printer (`tree_printer`)
///
/// Draws categories, stylesheets, and components with `├──`/`└──` connectors.
pub mod tree_printer;
