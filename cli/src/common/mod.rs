//! # gwstyles Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are neither command logic (`commands::`), core
//! infrastructure (`core::`), nor part of the discovery engine (`catalog::`).
//!
//! - **`fs`**: file reading and writing with error context.
//!

/// Utilities for filesystem operations.
pub mod fs;
