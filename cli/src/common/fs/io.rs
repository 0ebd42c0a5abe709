//! # Railshad Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem input/output operations
//! the installer performs against a target project tree. It provides
//! convenient, robust wrappers around standard library `std::fs` functions
//! for ensuring directories exist, reading entire files into strings, and
//! writing string content back to files.
//!
//! ## Architecture
//!
//! The module offers three focused utility functions:
//! - **`ensure_dir_exists`**: Checks if a directory exists at the given path. If not, it creates the directory, including any necessary parent directories (`fs::create_dir_all`). It also validates that if a path *does* exist, it is actually a directory.
//! - **`read_file_to_string`**: A wrapper around `fs::read_to_string` that adds context to potential I/O errors using `anyhow::Context`.
//! - **`write_string_to_file`**: Writes a string slice to the specified file path, creating the parent directory first via `ensure_dir_exists`. Overwrites an existing file in a single full-file write, so a successful return always means the complete new content is on disk.
//!
//! ## Usage
//!
//! These utilities back the higher-level install steps:
//! - the stylesheet patcher reads the entrypoint with `read_file_to_string`
//!   and rewrites it with `write_string_to_file`;
//! - template copying uses `ensure_dir_exists` before each `fs::copy`.
//!
//! ```rust
//! use crate::common::fs::io;
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let entrypoint = Path::new("app/assets/tailwind/application.css");
//!
//! let original = io::read_file_to_string(entrypoint)?;
//! let patched = format!("@import \"../stylesheets/shadcn.css\";\n{}", original);
//! io::write_string_to_file(entrypoint, &patched)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{InstallerError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function attempts to create the
/// directory, including any necessary parent directories (similar to
/// `mkdir -p`). If the path already exists but is not a directory (e.g.,
/// it's a file), an error (`InstallerError::FileSystem`) is returned.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the directory path to ensure exists.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the directory exists or was successfully created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(InstallerError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// This is a simple wrapper around `std::fs::read_to_string` that adds
/// contextual information to the error message if reading fails.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file to read.
///
/// # Returns
///
/// * `Result<String>` - Returns `Ok(String)` containing the file content if successful.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with
/// context indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// This function first ensures that the parent directory of the target
/// `path` exists, creating it recursively if necessary using
/// `ensure_dir_exists`. It then writes the provided `content` to the file in
/// one call; there is no partial-write state observable after return.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the target file path.
/// * `content` - A `&str` slice containing the content to write to the file.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the file was successfully written.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The parent directory cannot be created.
/// - Writing to the file fails (e.g., permissions, I/O error).
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}
