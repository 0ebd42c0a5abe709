//! # Railshad Component Catalog
//!
//! File: cli/src/core/catalog.rs
//!
//! ## Overview
//!
//! This module implements the catalog system for railshad, handling loading,
//! parsing, validation, and access to the component catalog. The catalog is
//! the installer's configuration: a JSON document shipped alongside the
//! template tree that maps each installable component name to the files it
//! owns and the components it depends on.
//!
//! ## Architecture
//!
//! The catalog system follows these principles:
//! - The catalog is loaded once per command execution and passed explicitly
//!   to the modules that need it; there is no ambient global state.
//! - The template root is resolved from multiple sources in order of
//!   precedence and validated before use.
//! - Structured data models ensure type safety; in particular the two shapes
//!   a dependency entry can take are an explicit enum, so the asymmetric
//!   recursion rule is an exhaustive match rather than a runtime type probe.
//!
//! Template root sources (in order of precedence):
//! 1. The `--templates <DIR>` command-line option
//! 2. The `RAILSHAD_TEMPLATES_DIR` environment variable
//! 3. The `templates/` directory compiled in from the workspace root
//!
//! ## Examples
//!
//! Loading and using the catalog:
//!
//! ```rust
//! let template_root = catalog::resolve_template_root(args.templates.as_deref())?;
//! let catalog = catalog::Catalog::load(&template_root)?;
//!
//! if let Some(descriptor) = catalog.descriptor("accordion") {
//!     for file in &descriptor.files {
//!         // copy templates/<file> into the target tree
//!     }
//! }
//! ```
//!
use crate::core::error::{InstallerError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// File name of the catalog document inside the template root.
const CATALOG_FILENAME: &str = "components.json";

/// Environment variable overriding the template root location.
const TEMPLATES_DIR_ENV: &str = "RAILSHAD_TEMPLATES_DIR";

/// Describes one installable component: the files it owns and the other
/// catalog entries it depends on, in declaration order.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ComponentDescriptor {
    /// Paths relative to both the template root and the target root. Each is
    /// copied byte-for-byte from the former to the latter.
    #[serde(default)]
    pub files: Vec<String>,
    /// Dependencies in catalog order. See [`Dependency`] for the two shapes
    /// an entry can take and how they differ.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

/// One dependency entry of a component.
///
/// The catalog allows two shapes with deliberately different install depth:
/// - a bare string names a component whose *own files only* are copied —
///   its dependencies are not followed;
/// - a structured entry names a component that is installed through the full
///   procedure, files *and* transitive dependencies.
///
/// Modeling this as an enum keeps the asymmetry visible at every use site:
/// the installer has to match both arms.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Dependency {
    /// `"popover"` — copy popover's files, do not recurse further.
    Bare(String),
    /// `{"component": "dialog"}` — full recursive install of dialog.
    Nested(NestedDependency),
}

/// The structured form of a dependency entry.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NestedDependency {
    /// Name of the sub-component to install recursively.
    pub component: String,
}

/// The parsed component catalog plus the template root it was loaded from.
///
/// A `BTreeMap` keeps the entries in name order, which the catalog listing
/// relies on. Values are `Option` because the document may map a name to
/// `null`; such entries are listed but are not valid install targets.
#[derive(Debug, Clone)]
pub struct Catalog {
    template_root: PathBuf,
    components: BTreeMap<String, Option<ComponentDescriptor>>,
}

impl Catalog {
    /// Loads and parses `components.json` from the given template root.
    ///
    /// # Arguments
    ///
    /// * `template_root` - Directory containing the catalog document and the
    ///   template files it refers to.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the catalog document cannot be read or is not
    /// valid JSON of the expected shape.
    pub fn load(template_root: &Path) -> Result<Catalog> {
        let catalog_path = template_root.join(CATALOG_FILENAME);
        debug!("Loading component catalog from {:?}", catalog_path);

        let raw = fs::read_to_string(&catalog_path)
            .with_context(|| format!("Failed to read catalog file {:?}", catalog_path))?;
        Self::parse(&raw, template_root)
    }

    /// Parses a catalog document from a JSON string. Split out from [`load`]
    /// so tests can exercise parsing without touching the filesystem.
    pub fn parse(raw: &str, template_root: &Path) -> Result<Catalog> {
        let components: BTreeMap<String, Option<ComponentDescriptor>> =
            serde_json::from_str(raw).map_err(InstallerError::from)?;
        debug!("Parsed catalog with {} entries", components.len());
        Ok(Catalog {
            template_root: template_root.to_path_buf(),
            components,
        })
    }

    /// Returns the descriptor for `name`, or `None` when the name is unknown
    /// *or* maps to `null`. A component is a valid install target exactly
    /// when this returns `Some`.
    pub fn descriptor(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name).and_then(|entry| entry.as_ref())
    }

    /// True when `name` is a valid install target (known and non-null).
    pub fn is_valid(&self, name: &str) -> bool {
        self.descriptor(name).is_some()
    }

    /// All catalog entry names in sorted order, including `null` entries —
    /// the listing enumerates everything the document mentions.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of entries in the catalog document.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the catalog document contains no entries at all.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The directory the catalog and all template files live under.
    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Absolute path of a template file named by a catalog-relative path.
    pub fn template_path(&self, relative: &str) -> PathBuf {
        self.template_root.join(relative)
    }
}

/// Resolves the template root directory for this invocation.
///
/// Precedence: explicit CLI override, then the `RAILSHAD_TEMPLATES_DIR`
/// environment variable, then the workspace `templates/` directory baked in
/// at compile time. The chosen path must exist and be a directory.
///
/// # Arguments
///
/// * `override_path` - Value of the `--templates` option, if given.
///
/// # Errors
///
/// Returns an `Err` if the resolved path does not exist or is not a
/// directory.
pub fn resolve_template_root(override_path: Option<&Path>) -> Result<PathBuf> {
    let root = match override_path {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(TEMPLATES_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_template_root(),
        },
    };

    if !root.is_dir() {
        anyhow::bail!(InstallerError::Catalog(format!(
            "Template directory {:?} does not exist or is not a directory. \
             Pass --templates or set {} to point at a template tree.",
            root, TEMPLATES_DIR_ENV
        )));
    }
    debug!("Resolved template root: {:?}", root);
    Ok(root)
}

/// The `templates/` directory at the workspace root, resolved at compile
/// time. Works for a source checkout; packaged installs are expected to set
/// the environment variable or pass `--templates`.
fn default_template_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("templates")
}
