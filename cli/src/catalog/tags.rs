//! # Comment Tag Extraction
//!
//! File: cli/src/catalog/tags.rs
//!
//! ## Overview
//!
//! Turns the body of a comment block into typed metadata. Two kinds of block
//! are recognised:
//!
//! - The **header block** of a stylesheet, carrying `@category`, `@order`
//!   and `@description` for the whole file.
//! - **Component blocks**, marked with `@blockStyleComponent true`, carrying
//!   `@name` and an optional `@description`.
//!
//! Only the first occurrence of each tag in a block is read. Parsing is
//! lenient: a tag that does not match its pattern is treated as absent.
//!
//! ```text
//! /**
//!  * @blockStyleComponent true
//!  * @name .gw-stack
//!  * @description Vertical rhythm between children.
//!  */
//! ```
//!
use regex::Regex;
use std::sync::LazyLock;

/// Literal that marks a comment block as a block style component.
pub const COMPONENT_MARKER: &str = "@blockStyleComponent true";

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@category\s+(.+)").expect("valid regex"));
static ORDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@order\s+(-?[0-9]+)").expect("valid regex"));
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@description\s+(.+)").expect("valid regex"));
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@name\s+([.a-zA-Z0-9_-]+)").expect("valid regex"));

/// File-level tags read from a header block. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderTags {
    pub category: Option<String>,
    pub order: Option<i64>,
    pub description: Option<String>,
}

/// A single component declared by a marked comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTag {
    /// Class name with leading and trailing dots removed.
    pub name: String,
    pub description: String,
}

fn first_capture<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses `-?[0-9]+`, saturating at the `i64` bounds on overflow.
fn parse_order(digits: &str) -> i64 {
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Reads `@category`, `@order` and `@description` from a header block body.
pub fn parse_header(body: &str) -> HeaderTags {
    HeaderTags {
        category: first_capture(&CATEGORY_RE, body).map(|text| text.trim().to_string()),
        order: first_capture(&ORDER_RE, body).map(parse_order),
        description: first_capture(&DESCRIPTION_RE, body).map(|text| text.trim().to_string()),
    }
}

/// Reads a component declaration from a comment block body.
///
/// Returns `None` when the block is not marked with `COMPONENT_MARKER` or has
/// no parsable `@name`. Leading and trailing dots are trimmed from the name,
/// so `@name ...` yields the empty name.
pub fn parse_component(body: &str) -> Option<ComponentTag> {
    if !body.contains(COMPONENT_MARKER) {
        return None;
    }
    let name = first_capture(&NAME_RE, body)?.trim_matches('.');
    let description = first_capture(&DESCRIPTION_RE, body)
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    Some(ComponentTag {
        name: name.to_string(),
        description,
    })
}
