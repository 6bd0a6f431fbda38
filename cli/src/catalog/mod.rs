//! # Block Style Component Catalog
//!
//! File: cli/src/catalog/mod.rs
//!
//! ## Overview
//!
//! The discovery engine. Given a directory of theme stylesheets it produces
//! a `Catalog`: categories, in priority order, each holding the stylesheets
//! that declare at least one block style component.
//!
//! ## Architecture
//!
//! - `comments`: finds `/** ... */` blocks in raw stylesheet text
//! - `tags`: reads `@category`/`@order`/`@description` and `@name` tags from a block
//! - `ordering`: the immutable category priority table
//! - `model`: `StyleFile`, `Catalog` and friends
//! - `discovery`: `StyleDiscoverer`, which ties the above together
//! - `filter`: applies a search query to a catalog
//!
//! ```rust
//! use crate::catalog::{CategoryOrder, StyleDiscoverer};
//!
//! let catalog = StyleDiscoverer::new(CategoryOrder::default()).discover(&dir);
//! let view = catalog::filter::filter(&catalog, "grid");
//! ```
//!
pub mod comments;
pub mod discovery;
pub mod filter;
pub mod model;
pub mod ordering;
pub mod tags;

pub use discovery::{ExtensionMatch, StyleDiscoverer};
pub use model::Catalog;
pub use ordering::{CategoryOrder, CategoryRank};
