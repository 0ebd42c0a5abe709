//! # Railshad CLI List Integration Tests
//!
//! File: cli/tests/list.rs
//!
//! ## Overview
//!
//! Integration tests for the `railshad list` command, which prints the
//! component catalog as ready-to-run install invocations.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// # Test List Shows Every Catalog Entry (`test_list_shows_catalog`)
///
/// Against the repository's real catalog, the listing must include each
/// component and the closing count line.
#[test]
fn test_list_shows_catalog() {
    railshad_cmd()
        .arg("list")
        .arg("--templates")
        .arg(templates_dir())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Available components in")
                .and(predicate::str::contains("railshad install accordion"))
                .and(predicate::str::contains("railshad install dropdown-menu"))
                .and(predicate::str::contains("railshad install popover"))
                .and(predicate::str::contains("Found 8 component(s).")),
        );
}

/// # Test List With Empty Catalog (`test_list_empty_catalog`)
///
/// An empty catalog document is not an error; the listing just says so.
#[test]
fn test_list_empty_catalog() {
    let templates = tempdir().expect("Failed to create temp templates dir");
    fs::write(templates.path().join("components.json"), "{}")
        .expect("Failed to write empty catalog");

    railshad_cmd()
        .arg("list")
        .arg("--templates")
        .arg(templates.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(the catalog is empty)")
                .and(predicate::str::contains("Found 0 component(s).")),
        );
}

/// # Test List Missing Templates Dir (`test_list_missing_templates_dir`)
///
/// Pointing at a non-existent template tree is a hard error with a hint
/// about how to fix it.
#[test]
fn test_list_missing_templates_dir() {
    railshad_cmd()
        .arg("list")
        .arg("--templates")
        .arg("/path/that/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template directory"));
}
