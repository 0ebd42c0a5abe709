//! # Railshad Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module acts as the primary interface and organizational unit for all
//! filesystem-related utility functions within the railshad CLI. It
//! aggregates functionality from specialized submodules, providing a
//! consistent entry point for file I/O, template copying, and the stylesheet
//! import patch.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`copy`**: Copies a single template file byte-for-byte into the target tree, creating parents and skipping missing sources. Used for every catalog-owned file and prerequisite artifact.
//! - **`io`**: Provides basic input/output operations like ensuring directories exist (`ensure_dir_exists`), reading files to strings (`read_file_to_string`), and writing strings to files (`write_string_to_file`).
//! - **`patch`**: The idempotent import-prepend applied to the detected stylesheet entrypoint, plus the relative import path computation.
//!
//! Callers import from the specific submodule (e.g.,
//! `crate::common::fs::io::ensure_dir_exists`); no re-exports are defined
//! here.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{copy, io, patch};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let source = Path::new("templates/app/assets/stylesheets/shadcn.css");
//! let destination = Path::new("target/app/assets/stylesheets/shadcn.css");
//! let entrypoint = Path::new("target/app/assets/tailwind/application.css");
//!
//! copy::copy_template_file(source, destination)?;
//! patch::ensure_import(entrypoint, "shadcn.css", "@import \"../stylesheets/shadcn.css\";")?;
//! let contents = io::read_file_to_string(entrypoint)?;
//! # Ok(())
//! # }
//! ```
//!

/// Contains the single-file template copy primitive (`copy_template_file`).
pub mod copy;
/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
/// Contains the idempotent stylesheet import patch (`ensure_import`, `relative_import_path`).
pub mod patch;
