//! # gwstyles CLI Styles Integration Tests
//!
//! File: cli/tests/styles.rs
//!
//! ## Overview
//!
//! Runs `gwstyles styles list|export|search` against stylesheet fixtures in
//! temporary directories. Every command runs through `isolated_cmd`, so the
//! only configuration in play is what a test writes itself.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// A theme with components in two categories and one uncategorized file.
fn theme_fixture(root: &std::path::Path) -> std::path::PathBuf {
    let styles = root.join("theme").join("css").join("block-style-components");
    write_stylesheet(
        &styles,
        "colors.css",
        &stylesheet("🎨 Colors", 0, &[("gw-brand", "Brand background")]),
    );
    write_stylesheet(
        &styles,
        "grid.css",
        &stylesheet("🔲 Layout", 0, &[("gw-grid", "Two column layout")]),
    );
    write_stylesheet(
        &styles,
        "misc.css",
        "/**\n * @blockStyleComponent true\n * @name .gw-misc\n */\n",
    );
    write_stylesheet(&styles, "notes.txt", "/**\n * @blockStyleComponent true\n * @name gw-ignored\n */\n");
    styles
}

#[test]
fn test_list_prints_tree_in_priority_order() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());

    let output = isolated_cmd(home.path())
        .args(["styles", "list", "--dir"])
        .arg(&styles)
        .assert()
        .success()
        .stdout(predicate::str::contains("gw-grid: Two column layout"))
        .stdout(predicate::str::contains("gw-misc"))
        .stdout(predicate::str::contains("gw-ignored").not())
        .stdout(predicate::str::contains(
            "Found 3 component(s) in 3 file(s) across 3 category group(s).",
        ))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let layout = stdout.find("🔲 Layout").unwrap();
    let colors = stdout.find("🎨 Colors").unwrap();
    let uncategorized = stdout.find("Uncategorized").unwrap();
    assert!(layout < colors && colors < uncategorized);
}

#[test]
fn test_list_single_category() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());

    isolated_cmd(home.path())
        .args(["styles", "list", "--category", "🎨 Colors", "--dir"])
        .arg(&styles)
        .assert()
        .success()
        .stdout(predicate::str::contains("gw-brand"))
        .stdout(predicate::str::contains("gw-grid").not());

    isolated_cmd(home.path())
        .args(["styles", "list", "--category", "Nope", "--dir"])
        .arg(&styles)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Nope'"));
}

#[test]
fn test_list_resolves_theme_components_dir() {
    let home = tempdir().unwrap();
    theme_fixture(home.path());

    isolated_cmd(home.path())
        .args(["styles", "list", "--theme"])
        .arg(home.path().join("theme"))
        .assert()
        .success()
        .stdout(predicate::str::contains("gw-brand"));
}

#[test]
fn test_list_reads_theme_from_env() {
    let home = tempdir().unwrap();
    theme_fixture(home.path());

    isolated_cmd(home.path())
        .env("GWSTYLES_THEME", home.path().join("theme"))
        .args(["styles", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gw-grid"));
}

#[test]
fn test_list_reads_theme_from_project_config() {
    let home = tempdir().unwrap();
    theme_fixture(home.path());
    fs::write(
        home.path().join(".gwstyles.toml"),
        format!("[theme]\npath = {:?}\n", home.path().join("theme")),
    )
    .unwrap();

    isolated_cmd(home.path())
        .args(["styles", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gw-brand"));
}

#[test]
fn test_list_missing_directory_is_not_an_error() {
    let home = tempdir().unwrap();
    isolated_cmd(home.path())
        .args(["styles", "list", "--dir", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No block style components found"));
}

#[test]
fn test_list_category_on_missing_directory_fails() {
    let home = tempdir().unwrap();
    isolated_cmd(home.path())
        .args(["styles", "list", "--category", "Nope", "--dir", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Nope'"));
}

#[test]
fn test_list_without_theme_fails() {
    let home = tempdir().unwrap();
    isolated_cmd(home.path())
        .args(["styles", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("No theme path configured"));
}

#[test]
fn test_invalid_project_config_fails() {
    let home = tempdir().unwrap();
    fs::write(home.path().join(".gwstyles.toml"), "[theme]\ncolour = \"red\"\n").unwrap();
    isolated_cmd(home.path())
        .args(["styles", "list", "--dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load gwstyles configuration"));
}

#[test]
fn test_custom_category_table_reorders_output() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());
    fs::write(
        home.path().join(".gwstyles.toml"),
        "[[categories]]\nlabel = \"🎨 Colors\"\nrank = 1\n\n[[categories]]\nlabel = \"🔲 Layout\"\nrank = 2\n",
    )
    .unwrap();

    let output = isolated_cmd(home.path())
        .args(["styles", "list", "--dir"])
        .arg(&styles)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.find("🎨 Colors").unwrap() < stdout.find("🔲 Layout").unwrap());
}

#[test]
fn test_export_json_is_ordered_and_deterministic() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());

    let run = || {
        isolated_cmd(home.path())
            .args(["styles", "export", "--dir"])
            .arg(&styles)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let json = String::from_utf8(first).unwrap();
    assert!(json.find("🔲 Layout").unwrap() < json.find("🎨 Colors").unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Uncategorized"]["misc"]["components"]["gw-misc"], "");
    assert_eq!(
        value["🔲 Layout"]["grid"]["description"],
        "🔲 Layout helpers"
    );
}

#[test]
fn test_export_html_to_file() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());
    let target = home.path().join("out").join("styles.html");

    isolated_cmd(home.path())
        .args(["styles", "export", "--format", "html", "--dir"])
        .arg(&styles)
        .arg("--output")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 component(s)"));

    let html = fs::read_to_string(target).unwrap();
    assert!(html.contains(r#"id="groundwork-styles-wrapper""#));
    assert!(html.contains("gw-brand"));
}

#[test]
fn test_search_prints_matches_only() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());

    isolated_cmd(home.path())
        .args(["styles", "search", "TWO COLUMN", "--dir"])
        .arg(&styles)
        .assert()
        .success()
        .stdout(predicate::str::contains("gw-grid"))
        .stdout(predicate::str::contains("gw-brand").not())
        .stdout(predicate::str::contains("1 match(es) for 'two column'."));
}

#[test]
fn test_search_json() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());

    let output = isolated_cmd(home.path())
        .args(["styles", "find", "brand", "--json", "--dir"])
        .arg(&styles)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["query"], "brand");
    assert_eq!(value["matches"], 1);
    assert!(value["catalog"].get("🔲 Layout").is_none());
}

#[test]
fn test_search_without_matches() {
    let home = tempdir().unwrap();
    let styles = theme_fixture(home.path());

    isolated_cmd(home.path())
        .args(["styles", "search", "zzz", "--dir"])
        .arg(&styles)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 match(es) for 'zzz'."));
}
