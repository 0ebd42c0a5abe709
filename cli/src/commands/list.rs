//! # Railshad List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! This module implements the `railshad list` command, which displays every
//! component the catalog offers. The same listing backs the soft-failure
//! path of `railshad install`: an unknown component name prints this table
//! instead of erroring.
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! railshad list
//! ```
//!
//! Example output:
//!
//! ```
//! Available components in '/home/user/railshad/templates':
//!
//! railshad install accordion            # A accordion component
//! railshad install alert                # A alert component
//! railshad install dropdown-menu        # A dropdown-menu component
//!
//! Found 3 component(s).
//! ```
//!
use crate::core::catalog::{self, Catalog};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # List Command Arguments (`ListArgs`)
///
/// Defines the command-line arguments accepted by the `railshad list`
/// subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Optional: directory containing the template catalog. Overrides the
    /// RAILSHAD_TEMPLATES_DIR environment variable and the built-in default.
    #[arg(long)]
    templates: Option<PathBuf>,
}

/// # Handle List Command (`handle_list`)
///
/// Loads the catalog and prints one aligned invocation line per entry.
///
/// ## Arguments
///
/// * `args` - The parsed `ListArgs`.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once the listing is printed; `Err` if the
///   catalog cannot be loaded.
pub fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling list command...");

    let template_root = catalog::resolve_template_root(args.templates.as_deref())?;
    let catalog = Catalog::load(&template_root)
        .context("Failed to load the component catalog")?;

    println!(
        "Available components in '{}':",
        catalog.template_root().display()
    );
    print_catalog_listing(&catalog);
    println!("\nFound {} component(s).", catalog.len());
    Ok(())
}

/// Prints the catalog as ready-to-run install invocations, one per entry,
/// with the component column padded to a fixed width so the descriptions
/// align. Shared with the install command's unknown-component output.
pub fn print_catalog_listing(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("(the catalog is empty)");
        return;
    }

    // Pad to the longest name, with a floor so short catalogs still read as
    // a table.
    let name_width = catalog
        .names()
        .map(str::len)
        .max()
        .unwrap_or(20)
        .max(20);

    println!();
    for name in catalog.names() {
        println!(
            "railshad install {:<width$} # A {} component",
            name,
            name,
            width = name_width
        );
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_list_args_parsing() {
        let args = ListArgs::try_parse_from(["list"]).unwrap();
        assert!(args.templates.is_none());

        let args_templates =
            ListArgs::try_parse_from(["list", "--templates", "/tmp/templates"]).unwrap();
        assert_eq!(args_templates.templates, Some(PathBuf::from("/tmp/templates")));
    }

    #[test]
    fn test_handle_list_reads_catalog() -> Result<()> {
        let templates = tempdir()?;
        fs::write(
            templates.path().join("components.json"),
            r#"{"accordion": {"files": []}, "alert": {"files": []}}"#,
        )?;

        handle_list(ListArgs {
            templates: Some(templates.path().to_path_buf()),
        })?;
        Ok(())
    }

    #[test]
    fn test_handle_list_missing_catalog_is_an_error() -> Result<()> {
        let templates = tempdir()?;
        // Directory exists but holds no components.json.
        let result = handle_list(ListArgs {
            templates: Some(templates.path().to_path_buf()),
        });
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_print_catalog_listing_empty() -> Result<()> {
        let catalog = Catalog::parse("{}", Path::new("/templates"))?;
        // Must not panic on an empty document.
        print_catalog_listing(&catalog);
        Ok(())
    }
}
