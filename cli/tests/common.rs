//! # Railshad CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`install.rs`, `list.rs`,
//! `main_tests.rs`). This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs`
//! file in that directory (that isn't a module like this one) is compiled as
//! a separate test crate linked against the main `railshad` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;

use std::fs;
use std::path::{Path, PathBuf};

/// # Get Railshad Command (`railshad_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `railshad` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `railshad` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn railshad_cmd() -> Command {
    Command::cargo_bin("railshad").expect("Failed to find railshad binary for testing")
}

/// The repository's real template catalog, shipped at the workspace root.
/// Integration tests install from it so they exercise the same catalog a
/// source checkout would.
pub fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../templates")
}

/// Creates a file under `root` at `relative`, creating parent directories as
/// needed. The workhorse for laying out mock Rails targets in tests.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("file paths have parents"))
        .expect("failed to create parent directories");
    fs::write(path, contents).expect("failed to write test file");
}

/// Lays out the minimal Rails target the happy-path tests start from: a
/// Tailwind entrypoint at the conventional tailwindcss-rails location.
pub fn write_tailwind_entrypoint(root: &Path) {
    write_file(root, "app/assets/tailwind/application.css", "@tailwind base;\n");
}
