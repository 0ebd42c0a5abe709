//! # Railshad Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module provides the file-copy primitive the installer is built on:
//! copying one template file byte-for-byte from the template root to the
//! corresponding path under the target project root.
//!
//! ## Architecture
//!
//! The primary function, `copy_template_file`, wraps `std::fs::copy` with the
//! two behaviors every install step relies on:
//! - Intermediate directories under the target are created as needed, so a
//!   catalog entry can name a path at any depth.
//! - A missing *source* file is not an error. The catalog is trusted static
//!   data but may be partially populated; a component whose template file is
//!   absent is logged and skipped, and the install continues.
//!
//! Error handling wraps `std::io` errors into the application's standard
//! `Result` type using `anyhow` for context.
//!
//! ## Usage
//!
//! This utility is used by the `railshad install` command for every file a
//! component (or one of its dependencies) owns, and for the prerequisite
//! artifacts (base stylesheet, Tailwind config, components helper).
//!
//! ```rust
//! use crate::common::fs::copy;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let source = Path::new("templates/app/views/components/ui/_accordion.html.erb");
//! let destination = Path::new("target/app/views/components/ui/_accordion.html.erb");
//!
//! if copy::copy_template_file(source, destination)? {
//!     println!("...copied accordion partial");
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Copies a single template file to a destination path, creating parent
/// directories as needed.
///
/// The copy is byte-for-byte; no rendering or rewriting happens on the way
/// through. An existing destination file is overwritten.
///
/// # Arguments
///
/// * `source` - A `&Path` to the template file to copy from.
/// * `destination` - A `&Path` to the target location. Parent directories
///   will be created if needed.
///
/// # Returns
///
/// * `Result<bool>` - `Ok(true)` when the file was copied, `Ok(false)` when
///   the source file does not exist and the copy was skipped.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The destination's parent directory cannot be created.
/// - The copy itself fails (e.g., I/O errors, permission issues).
pub fn copy_template_file(source: &Path, destination: &Path) -> Result<bool> {
    // A partially populated catalog may name files that were never shipped.
    // That is a skip, not a failure.
    if !source.is_file() {
        warn!("Template source {:?} is missing; skipping copy", source);
        return Ok(false);
    }

    if let Some(parent) = destination.parent() {
        io::ensure_dir_exists(parent)?;
    }

    fs::copy(source, destination).with_context(|| {
        format!("Failed to copy {:?} to {:?}", source, destination)
    })?;
    debug!("Copied {:?} to {:?}", source, destination);
    Ok(true)
}
