//! # gwstyles Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the command handlers, the
//! configuration loader, and the HTTP server. The discovery engine itself
//! (`crate::catalog::discovery`) never returns these: a missing directory,
//! an unreadable stylesheet, or a malformed tag degrades to an empty or
//! partial catalog instead.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `GwStylesError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_dir() {
//!     return Err(GwStylesError::Config(format!("Not a directory: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the gwstyles application.
#[derive(Error, Debug)]
pub enum GwStylesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Catalog serialization failed: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
