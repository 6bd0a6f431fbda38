//! # Category Priority Table
//!
//! File: cli/src/catalog/ordering.rs
//!
//! ## Overview
//!
//! Categories in a catalog are not sorted alphabetically. Each known label
//! carries a small display rank, and every label missing from the table is
//! pushed behind all known ones. This module holds that table as an
//! immutable value that is handed to `StyleDiscoverer` at construction time.
//!
//! ## Ordering rules
//!
//! - Listed labels sort by rank, ascending.
//! - Unlisted labels always sort after listed labels.
//! - Equal ranks (and all unlisted labels) fall back to byte-wise label order.
//!
//! ```rust
//! let order = CategoryOrder::default();
//! assert_eq!(order.rank("🔲 Layout"), Some(1));
//! assert_eq!(order.rank("Zebra"), None);
//! ```
//!
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Label given to stylesheets whose header block names no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Rank reported for labels that are not in the table.
pub const UNLISTED_RANK: u32 = 999;

/// The built-in table used when configuration does not supply one.
const DEFAULT_TABLE: &[(&str, u32)] = &[
    ("🔲 Layout", 1),
    ("📐 Spacing", 2),
    ("🧱 Box & Borders", 3),
    ("🔤 Typography", 4),
    ("🎨 Colors", 5),
    ("✨ Effects", 6),
    (UNCATEGORIZED, 99),
];

/// A single `(label, rank)` pair of the priority table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryRank {
    /// Category label exactly as written after `@category`.
    pub label: String,
    /// Display priority. Lower sorts first.
    pub rank: u32,
}

/// Immutable category priority table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    entries: Vec<CategoryRank>,
}

impl CategoryOrder {
    /// Builds a table from explicit entries. If a label is repeated, the first entry wins.
    pub fn new(entries: Vec<CategoryRank>) -> Self {
        Self { entries }
    }

    /// Rank of `label`, or `None` when the label is not in the table.
    pub fn rank(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.rank)
    }

    /// Rank used for display, substituting `UNLISTED_RANK` for unknown labels.
    pub fn display_rank(&self, label: &str) -> u32 {
        self.rank(label).unwrap_or(UNLISTED_RANK)
    }

    /// Total order over category labels.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let key = |label: &str| (self.rank(label).is_none(), self.display_rank(label));
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    }

    pub fn entries(&self) -> &[CategoryRank] {
        &self.entries
    }
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self::new(
            DEFAULT_TABLE
                .iter()
                .map(|(label, rank)| CategoryRank {
                    label: (*label).to_string(),
                    rank: *rank,
                })
                .collect(),
        )
    }
}
