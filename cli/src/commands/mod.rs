//! # gwstyles Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One submodule per top-level command. Each exposes an `Args` struct for
//! `clap` and an async `handle_*` function that `main.rs` dispatches to.
//!
//! - `styles`: discover, list, export, and search block style components
//! - `srv`: serve the catalog as HTML and JSON over HTTP
//!
pub mod srv;
pub mod styles;
