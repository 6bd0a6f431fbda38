//! # Catalog Filter
//!
//! File: cli/src/catalog/filter.rs
//!
//! ## Overview
//!
//! Applies a free-text query to a catalog the same way the admin style
//! picker does in the browser:
//!
//! - An empty query shows every component and leaves every section collapsed.
//! - Otherwise every section is closed, components whose label contains the
//!   query (case-insensitive) are shown, and each shown component opens its
//!   file section and its category section.
//!
//! A component's label is its name, followed by its description when it has
//! one, so `grid` matches `gw-grid` and `two column` matches a component
//! described as "Two column layout".
//!
//! The result, `FilterView`, keeps catalog order and is what the `search`
//! command prints and the HTML page renders.
//!
use super::model::{Catalog, CategoryGroup, Components, FileEntry};
use serde::Serialize;

/// A component option with its visibility after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentOption {
    pub name: String,
    pub description: String,
    pub visible: bool,
}

/// A file section (collapsible) with its component options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileView {
    pub filename: String,
    pub description: String,
    pub open: bool,
    pub components: Vec<ComponentOption>,
}

/// A category section (collapsible) with its file sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub label: String,
    pub open: bool,
    pub files: Vec<FileView>,
}

/// The whole catalog after a query has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    /// Normalized query (trimmed, lowercased).
    pub query: String,
    pub sections: Vec<CategoryView>,
}

impl FilterView {
    /// True when a non-empty query was applied.
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    fn visible_options(&self) -> impl Iterator<Item = &ComponentOption> {
        self.sections
            .iter()
            .flat_map(|section| &section.files)
            .flat_map(|file| &file.components)
            .filter(|option| option.visible)
    }

    /// Number of visible components.
    pub fn match_count(&self) -> usize {
        self.visible_options().count()
    }

    /// A catalog holding only visible components. Empty files and categories are dropped.
    pub fn matches(&self) -> Catalog {
        let mut groups = Vec::new();
        for section in &self.sections {
            let mut group = CategoryGroup::new(section.label.clone());
            for file in &section.files {
                let components: Components = file
                    .components
                    .iter()
                    .filter(|option| option.visible)
                    .map(|option| (option.name.clone(), option.description.clone()))
                    .collect();
                if !components.is_empty() {
                    group.insert(
                        file.filename.clone(),
                        FileEntry {
                            description: file.description.clone(),
                            components,
                        },
                    );
                }
            }
            if !group.files.is_empty() {
                groups.push(group);
            }
        }
        Catalog::from_groups(groups)
    }
}

/// The JSON body of a search: the normalized query, the match count, and
/// the pruned catalog of matching components.
#[derive(Debug, Serialize)]
pub struct SearchSummary {
    pub query: String,
    pub matches: usize,
    pub catalog: Catalog,
}

impl From<&FilterView> for SearchSummary {
    fn from(view: &FilterView) -> Self {
        Self {
            query: view.query.clone(),
            matches: view.match_count(),
            catalog: view.matches(),
        }
    }
}

/// Matches against the option label the picker shows: the name, followed by
/// the description when there is one.
fn label_matches(name: &str, description: &str, query: &str) -> bool {
    let label = if description.is_empty() {
        name.to_lowercase()
    } else {
        format!("{} {}", name, description).to_lowercase()
    };
    label.contains(query)
}

/// Applies `query` to `catalog`.
pub fn filter(catalog: &Catalog, query: &str) -> FilterView {
    let query = query.trim().to_lowercase();
    let show_all = query.is_empty();

    let sections = catalog
        .categories()
        .iter()
        .map(|group| {
            let files: Vec<FileView> = group
                .files
                .iter()
                .map(|file| {
                    let components: Vec<ComponentOption> = file
                        .entry
                        .components
                        .iter()
                        .map(|(name, description)| ComponentOption {
                            name: name.clone(),
                            description: description.clone(),
                            visible: show_all || label_matches(name, description, &query),
                        })
                        .collect();
                    let open = !show_all && components.iter().any(|option| option.visible);
                    FileView {
                        filename: file.filename.clone(),
                        description: file.entry.description.clone(),
                        open,
                        components,
                    }
                })
                .collect();
            CategoryView {
                label: group.label.clone(),
                open: files.iter().any(|file| file.open),
                files,
            }
        })
        .collect();

    FilterView { query, sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut layout = CategoryGroup::new("🔲 Layout");
        layout.insert(
            "grid".into(),
            FileEntry {
                description: "Grids".into(),
                components: [
                    ("gw-grid".to_string(), "Two column layout".to_string()),
                    ("gw-stack".to_string(), "Vertical rhythm".to_string()),
                ]
                .into_iter()
                .collect(),
            },
        );
        let mut colors = CategoryGroup::new("🎨 Colors");
        colors.insert(
            "brand".into(),
            FileEntry {
                description: String::new(),
                components: [("gw-brand".to_string(), String::new())].into_iter().collect(),
            },
        );
        Catalog::from_groups(vec![layout, colors])
    }

    #[test]
    fn test_empty_query_shows_all_and_opens_nothing() {
        let view = filter(&sample_catalog(), "   ");
        assert!(!view.is_filtering());
        assert_eq!(view.match_count(), 3);
        assert!(view.sections.iter().all(|s| !s.open));
        assert!(view
            .sections
            .iter()
            .flat_map(|s| &s.files)
            .all(|f| !f.open));
        assert_eq!(view.matches(), sample_catalog());
    }

    #[test]
    fn test_query_opens_only_ancestors_of_matches() {
        let view = filter(&sample_catalog(), "STACK");
        assert_eq!(view.query, "stack");
        assert_eq!(view.match_count(), 1);
        assert!(view.sections[0].open);
        assert!(view.sections[0].files[0].open);
        assert!(!view.sections[1].open);
        assert!(!view.sections[1].files[0].open);
        let grid = &view.sections[0].files[0].components;
        assert!(!grid.iter().find(|o| o.name == "gw-grid").unwrap().visible);
    }

    #[test]
    fn test_query_matches_description() {
        let view = filter(&sample_catalog(), "two column");
        let matches = view.matches();
        assert_eq!(matches.labels().collect::<Vec<_>>(), vec!["🔲 Layout"]);
        let grid = matches.get("🔲 Layout").unwrap().get("grid").unwrap();
        assert_eq!(grid.components.keys().collect::<Vec<_>>(), vec!["gw-grid"]);
    }

    #[test]
    fn test_query_spans_name_and_description() {
        let view = filter(&sample_catalog(), "gw-grid two");
        assert_eq!(view.match_count(), 1);
        let matches = view.matches();
        let grid = matches.get("🔲 Layout").unwrap().get("grid").unwrap();
        assert_eq!(grid.components.keys().collect::<Vec<_>>(), vec!["gw-grid"]);

        assert_eq!(filter(&sample_catalog(), "layout gw-grid").match_count(), 0);
    }

    #[test]
    fn test_no_matches() {
        let view = filter(&sample_catalog(), "nothing-like-this");
        assert_eq!(view.match_count(), 0);
        assert!(view.matches().is_empty());
        assert!(view.sections.iter().all(|s| !s.open));
    }

    #[test]
    fn test_search_summary_json() {
        let view = filter(&sample_catalog(), "brand");
        let json = serde_json::to_value(SearchSummary::from(&view)).unwrap();
        assert_eq!(json["query"], "brand");
        assert_eq!(json["matches"], 1);
        assert_eq!(json["catalog"]["🎨 Colors"]["brand"]["components"]["gw-brand"], "");
    }

    #[test]
    fn test_matches_keep_catalog_order() {
        let view = filter(&sample_catalog(), "gw-");
        assert_eq!(
            view.matches().labels().collect::<Vec<_>>(),
            vec!["🔲 Layout", "🎨 Colors"]
        );
    }
}
