//! # Catalog Data Model
//!
//! File: cli/src/catalog/model.rs
//!
//! ## Overview
//!
//! Types produced by a discovery pass:
//!
//! - `StyleFile`: one parsed stylesheet, before sorting.
//! - `FileEntry`: what the catalog keeps for a file (description and components).
//! - `CategoryGroup` / `FileSection`: one category and its files, in catalog order.
//! - `Catalog`: the sorted, nested result.
//!
//! ## Serialization
//!
//! A `Catalog` serializes as nested maps whose key order is the catalog
//! order, so JSON output reads exactly like the sorted tree:
//!
//! ```json
//! {
//!   "🔲 Layout": {
//!     "grid": {
//!       "description": "Grid helpers",
//!       "components": { "gw-grid": "Two-column grid" }
//!     }
//!   }
//! }
//! ```
//!
//! `CategoryGroup` and `FileSection` serialize as plain structs (lists keep
//! their order), which is the shape handed to the HTML templates.
//!
use super::ordering::UNCATEGORIZED;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Component name to description, for a single stylesheet.
pub type Components = BTreeMap<String, String>;

/// One scanned stylesheet with its header metadata and components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFile {
    /// File name without its extension.
    pub filename: String,
    pub category: String,
    /// Tie-breaker among files. Never used to order categories.
    pub order: i64,
    pub description: String,
    pub components: Components,
}

impl StyleFile {
    /// A file with every header field at its default and no components.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            category: UNCATEGORIZED.to_string(),
            order: 0,
            description: String::new(),
            components: Components::new(),
        }
    }

    pub fn into_entry(self) -> (String, String, FileEntry) {
        (
            self.category,
            self.filename,
            FileEntry {
                description: self.description,
                components: self.components,
            },
        )
    }
}

/// The value stored in the catalog for each file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileEntry {
    pub description: String,
    pub components: Components,
}

/// A file inside a category group.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileSection {
    pub filename: String,
    #[serde(flatten)]
    pub entry: FileEntry,
}

/// One category of the catalog and its files, in file-sort order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategoryGroup {
    pub label: String,
    pub files: Vec<FileSection>,
}

impl CategoryGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            files: Vec::new(),
        }
    }

    /// Inserts a file, replacing the entry in place if the name already exists.
    pub fn insert(&mut self, filename: String, entry: FileEntry) {
        match self.files.iter_mut().find(|f| f.filename == filename) {
            Some(existing) => existing.entry = entry,
            None => self.files.push(FileSection { filename, entry }),
        }
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.filename.as_str())
    }
}

/// The sorted result of a discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryGroup>,
}

impl Catalog {
    /// Wraps groups that are already in catalog order.
    pub(crate) fn from_groups(categories: Vec<CategoryGroup>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    pub fn get(&self, label: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|group| group.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|group| group.label.as_str())
    }

    pub fn file_count(&self) -> usize {
        self.categories.iter().map(|group| group.files.len()).sum()
    }

    pub fn component_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|group| &group.files)
            .map(|file| file.entry.components.len())
            .sum()
    }
}

#[cfg(test)]
impl CategoryGroup {
    pub fn get(&self, filename: &str) -> Option<&FileEntry> {
        self.files
            .iter()
            .find(|f| f.filename == filename)
            .map(|f| &f.entry)
    }
}

struct OrderedFiles<'a>(&'a [FileSection]);

impl Serialize for OrderedFiles<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for file in self.0 {
            map.serialize_entry(&file.filename, &file.entry)?;
        }
        map.end()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for group in &self.categories {
            map.serialize_entry(&group.label, &OrderedFiles(&group.files))?;
        }
        map.end()
    }
}
