//! # gwstyles Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the discovery scan, configuration loading,
//! and `styles export`. Callers import from the submodule directly:
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let css = io::read_stylesheet(&path)?;
//! io::write_string_to_file(&out, &json)?;
//! ```
//!

/// Basic file I/O: `ensure_dir_exists`, `read_file_to_string`, `read_stylesheet`, `write_string_to_file`.
pub mod io;
