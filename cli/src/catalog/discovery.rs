//! # Style Discovery
//!
//! File: cli/src/catalog/discovery.rs
//!
//! ## Overview
//!
//! `StyleDiscoverer::discover` scans one directory of stylesheets and builds
//! the sorted `Catalog`. The pass is best effort and never fails:
//!
//! - a missing directory, or a path that is not a directory, yields an empty catalog;
//! - an unreadable stylesheet is logged and skipped;
//! - malformed tags fall back to their defaults.
//!
//! ## Process
//!
//! 1. List the direct entries of the directory whose extension is `css`.
//! 2. For each file, read the header block (`@category`, `@order`, `@description`)
//!    and every marked component block (`@name`, `@description`).
//! 3. Drop files that declare no components.
//! 4. Sort files by `order`, then by filename.
//! 5. Group files by category in that order, then sort categories with the
//!    injected `CategoryOrder`.
//!
//! ```rust
//! let discoverer = StyleDiscoverer::new(CategoryOrder::default());
//! let catalog = discoverer.discover(Path::new("themes/groundwork/css/block-style-components"));
//! for group in catalog.categories() {
//!     println!("{} ({} files)", group.label, group.files.len());
//! }
//! ```
//!
use super::comments::{header_block, CommentBlocks};
use super::model::{Catalog, CategoryGroup, StyleFile};
use super::ordering::CategoryOrder;
use super::tags;
use crate::common::fs::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension accepted by the scan.
pub const STYLESHEET_EXTENSION: &str = "css";

/// How the `css` extension is compared against file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionMatch {
    /// Only `.css`.
    #[default]
    Exact,
    /// `.css`, `.CSS`, `.Css`, ...
    CaseInsensitive,
}

impl ExtensionMatch {
    fn accepts(self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        match self {
            ExtensionMatch::Exact => ext == STYLESHEET_EXTENSION,
            ExtensionMatch::CaseInsensitive => ext.eq_ignore_ascii_case(STYLESHEET_EXTENSION),
        }
    }
}

/// Builds catalogs of block style components from stylesheet directories.
#[derive(Debug, Clone, Default)]
pub struct StyleDiscoverer {
    category_order: CategoryOrder,
    extension_match: ExtensionMatch,
}

impl StyleDiscoverer {
    pub fn new(category_order: CategoryOrder) -> Self {
        Self {
            category_order,
            extension_match: ExtensionMatch::default(),
        }
    }

    pub fn with_extension_match(mut self, extension_match: ExtensionMatch) -> Self {
        self.extension_match = extension_match;
        self
    }

    pub fn category_order(&self) -> &CategoryOrder {
        &self.category_order
    }

    /// Scans `dir` and returns the sorted catalog. Never fails.
    pub fn discover(&self, dir: &Path) -> Catalog {
        if !dir.is_dir() {
            debug!(
                "Style directory '{}' is missing or not a directory; nothing to discover.",
                dir.display()
            );
            return Catalog::default();
        }
        debug!("Scanning '{}' for block style components", dir.display());

        let mut files = Vec::new();
        for path in self.stylesheet_paths(dir) {
            let filename = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };
            let content = match io::read_stylesheet(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable stylesheet: {:#}", e);
                    continue;
                }
            };
            let file = parse_stylesheet(&filename, &content);
            if file.components.is_empty() {
                debug!("No block style components in {}", path.display());
                continue;
            }
            files.push(file);
        }

        let catalog = self.assemble(files);
        info!(
            "Discovered {} component(s) in {} file(s) across {} category group(s) in '{}'",
            catalog.component_count(),
            catalog.file_count(),
            catalog.categories().len(),
            dir.display()
        );
        catalog
    }

    /// Direct children of `dir` that look like stylesheets, in name order.
    fn stylesheet_paths(&self, dir: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for entry_result in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to access entry in '{}': {}", dir.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_dir() || !self.extension_match.accepts(entry.path()) {
                continue;
            }
            paths.push(entry.into_path());
        }
        paths
    }

    /// Sorts parsed files and groups them into the final catalog.
    fn assemble(&self, mut files: Vec<StyleFile>) -> Catalog {
        files.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.filename.cmp(&b.filename))
        });

        let mut groups: Vec<CategoryGroup> = Vec::new();
        for file in files {
            let (category, filename, entry) = file.into_entry();
            match groups.iter_mut().find(|group| group.label == category) {
                Some(group) => group.insert(filename, entry),
                None => {
                    let mut group = CategoryGroup::new(category);
                    group.insert(filename, entry);
                    groups.push(group);
                }
            }
        }
        groups.sort_by(|a, b| self.category_order.compare(&a.label, &b.label));
        for group in &groups {
            debug!(
                "Category '{}': {}",
                group.label,
                group.filenames().collect::<Vec<_>>().join(", ")
            );
        }
        Catalog::from_groups(groups)
    }
}

/// Parses one stylesheet's text into a `StyleFile`.
///
/// Header tags come from the leading comment block only; components come
/// from every marked block in the file, later names overwriting earlier ones.
pub fn parse_stylesheet(filename: &str, content: &str) -> StyleFile {
    let mut file = StyleFile::new(filename);

    if let Some(body) = header_block(content) {
        let header = tags::parse_header(body);
        if let Some(category) = header.category {
            file.category = category;
        }
        if let Some(order) = header.order {
            file.order = order;
        }
        if let Some(description) = header.description {
            file.description = description;
        }
    }

    for body in CommentBlocks::new(content) {
        if let Some(component) = tags::parse_component(body) {
            file.components.insert(component.name, component.description);
        }
    }
    file
}
