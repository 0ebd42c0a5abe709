//! # Railshad Install Command
//!
//! File: cli/src/commands/install/mod.rs
//!
//! ## Overview
//!
//! This module implements the `railshad install` command, which installs a
//! named UI component — and everything it depends on — into a target Rails
//! project. It handles:
//! - Parsing command-line arguments for the install
//! - Loading the component catalog from the template tree
//! - Validating the requested component against the catalog
//! - Running the preflight checks that prepare the target project
//! - Copying the component's files and walking its dependency entries
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Resolve the template root and load `components.json` into a `Catalog`
//! 2. Validate the component name; an unknown or missing name prints the
//!    banner and the full catalog listing instead of installing (a soft
//!    outcome, not an error — the process still exits 0)
//! 3. Resolve the target root (argument or current directory)
//! 4. Run the preflight sequence (`preflight::check_target_app`)
//! 5. Copy the component's files, then walk its dependencies in catalog
//!    order: bare entries contribute their own files only, structured
//!    entries are installed through the full procedure recursively
//!
//! A run never copies the same target-relative path twice; the `Installer`
//! tracks what it has already placed.
//!
//! ## Examples
//!
//! Basic usage:
//!
//! ```bash
//! # Install the accordion component into the current directory
//! railshad install accordion
//!
//! # Install into an explicit Rails root
//! railshad install dropdown-menu ~/code/storefront
//!
//! # Use a non-default template tree
//! railshad install accordion --templates ./my-templates
//! ```
//!
use crate::core::catalog::{self, Catalog, Dependency};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::collections::HashSet;
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Preflight checks run against the target before any component files land.
mod preflight;
/// Detection helpers (stylesheet entrypoint, Tailwind config flavor).
pub mod utils;

/// # Install Command Arguments (`InstallArgs`)
///
/// Defines the command-line arguments accepted by the `railshad install`
/// subcommand. Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// The name of the component to install. When omitted or unknown, the
    /// catalog listing is printed instead.
    component: Option<String>,

    /// Optional: path to the target Rails root directory. Defaults to the
    /// current working directory.
    target_root: Option<PathBuf>,

    /// Optional: directory containing the template catalog. Overrides the
    /// RAILSHAD_TEMPLATES_DIR environment variable and the built-in default.
    #[arg(long)]
    templates: Option<PathBuf>,
}

/// The one-line usage banner shown above the catalog listing.
pub fn banner() -> &'static str {
    "railshad install <component_name> [target_root_path]"
}

/// # Handle Install Command (`handle_install`)
///
/// The main handler function for the `railshad install` command.
/// Orchestrates the install:
/// 1. Loads the catalog from the resolved template root.
/// 2. Validates the requested component; invalid names fall through to the
///    banner-and-listing output without touching the target.
/// 3. Runs the preflight checks against the target root.
/// 4. Installs the component and its dependencies.
///
/// ## Arguments
///
/// * `args` - The parsed `InstallArgs` containing all command-line options.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` on success *and* on the unknown-component path;
///   `Err` only for the fatal no-Tailwind abort or I/O failures.
pub fn handle_install(args: InstallArgs) -> Result<()> {
    info!("Handling install command...");

    let template_root = catalog::resolve_template_root(args.templates.as_deref())?;
    let catalog = Catalog::load(&template_root)
        .context("Failed to load the component catalog")?;

    // Validate before touching the target: an unknown name writes nothing.
    let component = match args.component {
        Some(name) if catalog.is_valid(&name) => name,
        requested => {
            if let Some(name) = requested {
                debug!("Unknown component requested: {}", name);
            }
            display_available_components(&catalog);
            return Ok(());
        }
    };

    let target_root = resolve_target_root(args.target_root)
        .context("Failed to resolve the target root directory")?;
    info!(
        "Installing '{}' into '{}'",
        component,
        target_root.display()
    );

    preflight::check_target_app(&catalog, &target_root)?;

    println!("Installing {} component...", component);
    let mut installer = Installer::new(&catalog, &target_root);
    installer.install(&component)?;
    println!("{} component installed!", capitalize(&component));

    Ok(())
}

/// Prints the usage banner plus one aligned line per catalog entry. This is
/// the command's only "help" surface for component names, shared with the
/// `railshad list` subcommand.
fn display_available_components(catalog: &Catalog) {
    println!("{}", banner());
    println!("\nAvailable components:");
    crate::commands::list::print_catalog_listing(catalog);
}

/// Resolves the target root: an absolute argument is taken as-is, a relative
/// one is joined to the current directory, and no argument means the current
/// directory itself.
fn resolve_target_root(argument: Option<PathBuf>) -> Result<PathBuf> {
    match argument {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => Ok(env::current_dir()
            .context("Failed to get current directory")?
            .join(path)),
        None => env::current_dir().context("Failed to get current directory"),
    }
}

/// Uppercases the first character, for the completion message.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// # Component Installer (`Installer`)
///
/// Walks a component's descriptor and copies every file it and its
/// dependency closure own into the target tree. Scoped to one invocation;
/// the `copied` set guarantees no target-relative path is written twice even
/// when several components share a file.
struct Installer<'a> {
    catalog: &'a Catalog,
    target_root: &'a Path,
    copied: HashSet<String>,
}

impl<'a> Installer<'a> {
    fn new(catalog: &'a Catalog, target_root: &'a Path) -> Self {
        Installer {
            catalog,
            target_root,
            copied: HashSet::new(),
        }
    }

    /// The full install procedure: the component's own files, then its
    /// dependency entries in catalog order. The two dependency shapes get
    /// different depth:
    /// - `Bare` names contribute their own files only;
    /// - `Nested` entries re-enter this procedure, files and dependencies.
    fn install(&mut self, name: &str) -> Result<()> {
        self.copy_component_files(name)?;

        let Some(descriptor) = self.catalog.descriptor(name) else {
            return Ok(());
        };
        for dependency in &descriptor.dependencies {
            match dependency {
                Dependency::Bare(dep_name) => self.copy_component_files(dep_name)?,
                Dependency::Nested(nested) => self.install(&nested.component)?,
            }
        }
        Ok(())
    }

    /// Copies the files owned by `name`, skipping paths already placed this
    /// run. An unknown or null catalog entry is logged and skipped; only the
    /// top-level component name is validated against the user.
    fn copy_component_files(&mut self, name: &str) -> Result<()> {
        let Some(descriptor) = self.catalog.descriptor(name) else {
            warn!("Catalog names unknown dependency '{}'; skipping", name);
            return Ok(());
        };

        for file in &descriptor.files {
            if !self.copied.insert(file.clone()) {
                debug!("Already copied {}; skipping duplicate", file);
                continue;
            }
            let source = self.catalog.template_path(file);
            let destination = self.target_root.join(file);
            if crate::common::fs::copy::copy_template_file(&source, &destination)? {
                println!("...copying {}", file);
            }
        }
        Ok(())
    }
}
