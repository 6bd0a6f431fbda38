//! # gwstyles CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! is compiled as its own crate and pulls this module in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get gwstyles Command (`gwstyles_cmd`)
///
/// An `assert_cmd::Command` for the compiled `gwstyles` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn gwstyles_cmd() -> Command {
    Command::cargo_bin("gwstyles").expect("Failed to find gwstyles binary for testing")
}

/// # Isolated gwstyles Command (`isolated_cmd`)
///
/// Like `gwstyles_cmd`, but run from `home` with `HOME` and
/// `XDG_CONFIG_HOME` pointing into it and `GWSTYLES_THEME` removed, so no
/// user or project configuration from the machine running the tests leaks in.
pub fn isolated_cmd(home: &Path) -> Command {
    let mut cmd = gwstyles_cmd();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("GWSTYLES_THEME")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `dir/name`.
pub fn write_stylesheet(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).expect("Failed to create stylesheet directory");
    fs::write(dir.join(name), content).expect("Failed to write stylesheet");
}

/// A stylesheet with a header and one component per `(name, description)`.
pub fn stylesheet(category: &str, order: i64, components: &[(&str, &str)]) -> String {
    let mut css = format!(
        "/**\n * @category {}\n * @order {}\n * @description {} helpers\n */\n",
        category, order, category
    );
    for (name, description) in components {
        css.push_str(&format!(
            "\n/**\n * @blockStyleComponent true\n * @name {}\n * @description {}\n */\n.{} {{ display: block; }}\n",
            name, description, name
        ));
    }
    css
}
