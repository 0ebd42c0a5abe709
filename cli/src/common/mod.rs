//! # Railshad Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared utility modules used throughout the railshad CLI. It aggregates
//! functionality for cross-cutting concerns: filesystem operations and the
//! ordered first-match probing the installer's detection logic is built on.
//!
//! By centralizing these utilities under the `common::` namespace, railshad
//! keeps a clear separation between command-specific logic (`commands::`)
//! and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`)
//! for its submodules. Each submodule encapsulates a specific domain:
//!
//! - **`fs`**: Foundational filesystem operations: reading/writing files, ensuring directory existence, copying template files, and the idempotent stylesheet patch. Includes `io`, `copy`, `patch`.
//! - **`probe`**: The shared "first candidate matching a predicate" utility used by the entrypoint candidate probe, the content scan, and the config variant probe.
//!
//! ## Usage
//!
//! Command handlers and other parts of the application import specific
//! functionality directly from the required submodule within `common`.
//!
//! ```rust
//! use crate::common::{fs, probe};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let target = Path::new("/some/rails/app");
//!
//! // Use filesystem utilities
//! fs::io::ensure_dir_exists(&target.join("config"))?;
//!
//! // Use the probe utility
//! let config = probe::first_existing_file(
//!     target,
//!     ["config/tailwind.config.ts", "config/tailwind.config.js"],
//! );
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for filesystem operations (I/O, template copying, stylesheet patching).
pub mod fs;
/// The ordered find-first-matching utility behind all of the installer's probes.
pub mod probe;
