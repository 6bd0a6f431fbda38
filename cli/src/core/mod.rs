//! # gwstyles Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//! - `templating`: HTML rendering of the catalog tree
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{GwStylesError, Result}; // For error handling
//! use crate::core::templating; // For catalog pages
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
