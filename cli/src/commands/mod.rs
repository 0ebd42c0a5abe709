//! # Railshad Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the railshad
//! CLI. It serves as the central point for importing and re-exporting
//! command modules to make them accessible to the main application entry
//! point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Top-level modules represent commands (e.g., `install`, `list`)
//! - A command with internal structure keeps its pieces in its own
//!   directory (`install` holds `preflight` and `utils`)
//! - All modules are made public for access from `main.rs`
//!
//! ## Commands
//!
//! - `install`: Installs a component and its dependencies into a target project
//! - `list`: Prints the component catalog
//!
//! Each command defines its own arguments structure and handler function
//! to process those arguments and implement the command's functionality.
//!

/// Command for installing a component (and its dependency closure) into a target Rails project.
pub mod install;
/// Command for listing every component the catalog offers.
pub mod list;
