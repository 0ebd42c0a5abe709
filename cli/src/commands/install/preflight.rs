//! # Railshad Install Preflight Checks
//!
//! File: cli/src/commands/install/preflight.rs
//!
//! ## Overview
//!
//! Before any component file is copied, the installer makes sure the target
//! project has the plumbing the components rely on. This module runs that
//! sequence of checks against the target root, fixing what it can and
//! aborting only when the project has no Tailwind pipeline at all.
//!
//! ## Architecture
//!
//! The checks run in a fixed order, each printing a `Checking for ...`
//! progress line:
//! 1. **Tailwind presence** — resolve the stylesheet entrypoint. Failure
//!    here is the single fatal path of the whole install: without an
//!    entrypoint there is nowhere to wire the generated import.
//! 2. **Base stylesheet** — ensure `app/assets/stylesheets/shadcn.css`
//!    exists, copying it from the template tree when missing.
//! 3. **Entrypoint import** — prepend `@import "<relative path>";` to the
//!    entrypoint unless some line already mentions `shadcn.css`.
//! 4. **Tailwind config** — detect the config flavor and ensure a matching
//!    `config/shadcn.tailwind.<ext>` exists, printing that flavor's
//!    integration instructions after a copy.
//! 5. **Components helper** — ensure `app/helpers/components_helper.rb`
//!    exists, copying it when missing.
//!
//! Every check except the first treats "already there" as success and
//! "template missing" as a logged skip; re-running the installer against an
//! already-prepared project changes nothing.
//!
use crate::commands::install::utils::entrypoint::EntrypointResolver;
use crate::commands::install::utils::variant::ConfigVariant;
use crate::common::fs::{copy, patch};
use crate::core::catalog::Catalog;
use crate::core::error::{InstallerError, Result};
use std::path::Path;
use tracing::info;

/// Target-relative path of the base stylesheet every component depends on.
pub const SHADCN_STYLESHEET: &str = "app/assets/stylesheets/shadcn.css";

/// Target-relative path of the view helper shared by all components.
pub const COMPONENTS_HELPER: &str = "app/helpers/components_helper.rb";

/// Substring whose presence in the entrypoint means the import is wired up.
const IMPORT_MARKER: &str = "shadcn.css";

/// Runs the full preflight sequence against `target_root`.
///
/// # Arguments
///
/// * `catalog` - The loaded catalog; supplies the template tree the
///   prerequisite artifacts are copied from.
/// * `target_root` - Root directory of the target Rails project.
///
/// # Errors
///
/// Returns an `Err` only when no Tailwind entrypoint can be found anywhere
/// in the target (`InstallerError::TailwindMissing`), or on I/O failure
/// while patching or copying.
pub fn check_target_app(catalog: &Catalog, target_root: &Path) -> Result<()> {
    println!("Checking for tailwind...");
    let mut resolver = EntrypointResolver::new(target_root);
    if resolver.resolve().is_none() {
        anyhow::bail!(InstallerError::TailwindMissing);
    }
    println!("...tailwind found.");

    println!("Checking for shadcn.css...");
    ensure_base_stylesheet(catalog, target_root)?;

    println!("Checking for shadcn import...");
    ensure_entrypoint_import(target_root, &mut resolver)?;

    println!("Checking for shadcn.tailwind config...");
    ensure_tailwind_config(catalog, target_root)?;

    println!("Checking for components_helper.rb...");
    ensure_components_helper(catalog, target_root)?;

    Ok(())
}

/// Check 2: the base stylesheet all component styles hang off of.
fn ensure_base_stylesheet(catalog: &Catalog, target_root: &Path) -> Result<()> {
    let destination = target_root.join(SHADCN_STYLESHEET);
    if destination.is_file() {
        println!("...found shadcn.css");
        return Ok(());
    }

    let source = catalog.template_path(SHADCN_STYLESHEET);
    if copy::copy_template_file(&source, &destination)? {
        println!("...copying shadcn.css to {}", SHADCN_STYLESHEET);
    } else {
        println!("Unable to locate the shadcn.css template; skipping copy.");
    }
    Ok(())
}

/// Check 3: the `@import` line wiring the base stylesheet into the build.
///
/// The import path is computed relative to the entrypoint's directory, so
/// the line stays correct whatever depth the entrypoint sits at. The line
/// is prepended: the base stylesheet defines custom properties and layers
/// that every later rule may consume, and the first line is the one spot
/// guaranteed to precede them all.
fn ensure_entrypoint_import(
    target_root: &Path,
    resolver: &mut EntrypointResolver,
) -> Result<()> {
    // The caller already established an entrypoint exists; the memoized
    // resolver hands it back without rescanning.
    let Some(entry_relative) = resolver.resolve() else {
        return Ok(());
    };
    let entry_absolute = target_root.join(&entry_relative);
    let entry_dir = entry_absolute.parent().unwrap_or(target_root);

    let asset_absolute = target_root.join(SHADCN_STYLESHEET);
    let import_path = patch::relative_import_path(&asset_absolute, entry_dir);
    let import_line = format!("@import \"{}\";", import_path);

    if patch::ensure_import(&entry_absolute, IMPORT_MARKER, &import_line)? {
        println!(
            "Importing shadcn.css into {}...",
            entry_relative.display()
        );
    } else {
        println!("...found shadcn import.");
    }
    Ok(())
}

/// Check 4: the Tailwind config extension shipped for the target's flavor.
fn ensure_tailwind_config(catalog: &Catalog, target_root: &Path) -> Result<()> {
    let variant = ConfigVariant::detect(target_root);
    let config_relative = variant.config_template_path();
    let destination = target_root.join(&config_relative);

    if destination.is_file() {
        println!("...found shadcn.tailwind.{}", variant);
        return Ok(());
    }

    let source = catalog.template_path(&config_relative);
    if copy::copy_template_file(&source, &destination)? {
        println!(
            "...copying shadcn.tailwind.{} to {}",
            variant, config_relative
        );
        println!("{}", variant.integration_message());
    } else {
        println!(
            "Unable to locate shadcn.tailwind template for .{}; skipping copy.",
            variant
        );
    }
    Ok(())
}

/// Check 5: the shared view helper the component partials call into.
fn ensure_components_helper(catalog: &Catalog, target_root: &Path) -> Result<()> {
    let destination = target_root.join(COMPONENTS_HELPER);
    if destination.is_file() {
        println!("...found components_helper.rb");
        return Ok(());
    }

    let source = catalog.template_path(COMPONENTS_HELPER);
    if copy::copy_template_file(&source, &destination)? {
        println!("...copying components_helper.rb to app/helpers");
    } else {
        info!("No components_helper.rb template shipped; skipping copy");
        println!("Unable to locate the components_helper.rb template; skipping copy.");
    }
    Ok(())
}
