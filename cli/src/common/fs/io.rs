//! # gwstyles Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that add `anyhow` context to failures:
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) unless it exists; rejects files in the way.
//! - **`read_file_to_string`**: strict UTF-8 read, used for configuration files.
//! - **`read_stylesheet`**: lossy read used by the discovery scan. Stylesheets with stray
//!   non-UTF-8 bytes still yield their comment blocks.
//! - **`write_string_to_file`**: writes export output, creating the parent directory first.
//!
use crate::core::error::{GwStylesError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created, including parents. If it exists
/// but is not a directory, `GwStylesError::FileSystem` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(GwStylesError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads a stylesheet, replacing invalid UTF-8 sequences with U+FFFD.
///
/// # Errors
///
/// Returns an `Err` only if the bytes cannot be read at all (missing file,
/// permissions, path is a directory, dangling symlink).
pub fn read_stylesheet(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read stylesheet {:?}", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory is created first when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("out.json").parent()` is `Some("")`, which needs no creating.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
