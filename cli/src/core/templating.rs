//! # gwstyles HTML Rendering
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders a filtered catalog (`FilterView`) as a collapsible HTML tree with
//! Tera: one `<details>` per category, one nested `<details>` per stylesheet,
//! and a checkbox per component. Open/closed state and component visibility
//! come straight from the view, so a page rendered for a query shows the
//! matching components with their ancestors expanded.
//!
//! Used by `gwstyles styles export --format html` and by `GET /` in `gwstyles srv`.
//! Autoescaping is on (the template name ends in `.html`), so labels such as
//! `🧱 Box & Borders` are emitted as `🧱 Box &amp; Borders`.
//!
//! ```rust
//! let view = filter::filter(&catalog, "");
//! let html = templating::render_catalog_page(&view, &PageOptions::default())?;
//! ```
//!
use crate::catalog::filter::FilterView;
use crate::core::error::{GwStylesError, Result};
use anyhow::anyhow;
use tera::Tera;
use tracing::debug;

const PAGE_TEMPLATE_NAME: &str = "catalog.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
</head>
<body>
<details id="groundwork-styles-wrapper" open>
  <summary>{{ title }}</summary>
  {% if search_form %}
  <form method="get" action="/">
    <input type="search" name="q" class="groundwork-style-filter" value="{{ query }}" placeholder="Filter styles">
  </form>
  {% endif %}
  {% if filtering %}
  <p class="match-count">{{ match_count }} match(es) for "{{ query }}"</p>
  {% endif %}
  {% if sections | length == 0 %}
  <p class="empty">No block style components found.</p>
  {% endif %}
  {% for section in sections %}
  <details class="category"{% if section.open %} open{% endif %}>
    <summary>{{ section.label }}</summary>
    {% for file in section.files %}
    <details class="file"{% if file.open %} open{% endif %}>
      <summary>{{ file.filename }}</summary>
      {% if file.description %}<p class="description">{{ file.description }}</p>{% endif %}
      <div class="groundwork-style-options">
        {% for component in file.components %}
        <div class="form-item"{% if not component.visible %} hidden{% endif %}>
          <label><input type="checkbox" name="styles[]" value="{{ component.name }}"> {{ component.name }}</label>
          {% if component.description %}<small>{{ component.description }}</small>{% endif %}
        </div>
        {% endfor %}
      </div>
    </details>
    {% endfor %}
  </details>
  {% endfor %}
</details>
</body>
</html>
"#;

/// Page-level settings that are not part of the catalog.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    /// Include the `?q=` search form (only useful when served).
    pub search_form: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Block Style Components".to_string(),
            search_form: false,
        }
    }
}

/// Renders `view` as a complete HTML page.
pub fn render_catalog_page(view: &FilterView, options: &PageOptions) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
        .map_err(|e| anyhow!(GwStylesError::Template { source: e }))?;

    let mut context = tera::Context::new();
    context.insert("title", &options.title);
    context.insert("search_form", &options.search_form);
    context.insert("query", &view.query);
    context.insert("filtering", &view.is_filtering());
    context.insert("match_count", &view.match_count());
    context.insert("sections", &view.sections);

    let html = tera.render(PAGE_TEMPLATE_NAME, &context).map_err(|e| {
        anyhow!(GwStylesError::Template { source: e }).context("Failed to render catalog page")
    })?;
    debug!("Rendered catalog page ({} bytes)", html.len());
    Ok(html)
}
