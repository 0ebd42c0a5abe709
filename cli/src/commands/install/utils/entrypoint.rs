//! # Railshad Stylesheet Entrypoint Detection
//!
//! File: cli/src/commands/install/utils/entrypoint.rs
//!
//! ## Overview
//!
//! This module answers the one question the whole install hinges on: which
//! stylesheet file does the target project's Tailwind build pipeline treat
//! as its entrypoint? That file is where the generated `@import` line must
//! land, and Rails projects keep it in several conventional places depending
//! on how Tailwind was set up (tailwindcss-rails, cssbundling, vite).
//!
//! ## Architecture
//!
//! Detection is layered:
//! 1. **Candidate probe** — a fixed, ordered list of conventional entrypoint
//!    locations is tested for existence. The order is a total order of
//!    preference: the first existing file wins regardless of what else
//!    exists further down the list.
//! 2. **Content scan** — when no candidate exists, the `app/assets` and
//!    `app/frontend` subtrees are walked for stylesheets (`css`, `pcss`,
//!    `scss`) whose contents include the literal `@tailwind` directive
//!    marker. Matches are taken in lexical path order so the result is
//!    deterministic for a fixed filesystem state; files that cannot be read
//!    are skipped with a warning.
//!
//! The outcome — found or not — is memoized on the resolver instance.
//! One invocation resolves the entrypoint exactly once; later calls return
//! the cached answer even if the filesystem changed underneath.
//!
//! ## Usage
//!
//! ```rust
//! use crate::commands::install::utils::entrypoint::EntrypointResolver;
//! use std::path::Path;
//!
//! let mut resolver = EntrypointResolver::new(Path::new("/some/rails/app"));
//! match resolver.resolve() {
//!     Some(relative) => println!("entrypoint: {}", relative.display()),
//!     None => println!("no Tailwind entrypoint found"),
//! }
//! ```
//!
use crate::common::probe;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// The at-rule keyword Tailwind's build tool uses to mark pipeline
/// directives. A stylesheet containing it is, for our purposes, an
/// entrypoint.
pub const TAILWIND_MARKER: &str = "@tailwind";

/// Conventional entrypoint locations, in preference order. The first entry
/// that exists as a regular file wins.
const ENTRYPOINT_CANDIDATES: [&str; 7] = [
    "app/assets/tailwind/application.css",
    "app/assets/stylesheets/application.tailwind.css",
    "app/assets/stylesheets/application.css",
    "app/assets/stylesheets/application.pcss",
    "app/assets/stylesheets/application.scss",
    "app/frontend/stylesheets/application.tailwind.css",
    "app/frontend/stylesheets/application.css",
];

/// Subtrees the content-scan fallback is restricted to.
const SCAN_SUBTREES: [&str; 2] = ["app/assets", "app/frontend"];

/// Stylesheet extensions the content-scan fallback considers.
const SCAN_EXTENSIONS: [&str; 3] = ["css", "pcss", "scss"];

/// Resolves and caches the Tailwind entrypoint of one target project.
///
/// The resolver is scoped to a single installer invocation: it holds the
/// target root it probes and the memoized outcome of the first `resolve`
/// call. Repeated calls never rescan.
#[derive(Debug)]
pub struct EntrypointResolver {
    target_root: PathBuf,
    /// `None` until the first `resolve` call; then `Some(outcome)`, where
    /// the inner `Option` records whether an entrypoint exists at all.
    resolved: Option<Option<PathBuf>>,
}

impl EntrypointResolver {
    /// Creates a resolver for the given target project root.
    pub fn new(target_root: &Path) -> Self {
        EntrypointResolver {
            target_root: target_root.to_path_buf(),
            resolved: None,
        }
    }

    /// Returns the entrypoint path relative to the target root, resolving it
    /// on the first call and returning the memoized answer afterwards.
    ///
    /// # Returns
    ///
    /// * `Some(path)` - The entrypoint, relative to the target root.
    /// * `None` - No candidate exists and no scanned stylesheet contains the
    ///   Tailwind marker.
    pub fn resolve(&mut self) -> Option<PathBuf> {
        if self.resolved.is_none() {
            let outcome = self
                .probe_candidates()
                .or_else(|| self.scan_for_marker());
            debug!("Resolved Tailwind entrypoint: {:?}", outcome);
            self.resolved = Some(outcome);
        }
        self.resolved.clone().flatten()
    }

    /// Stage 1: test the fixed candidate list in order.
    fn probe_candidates(&self) -> Option<PathBuf> {
        probe::first_existing_file(&self.target_root, ENTRYPOINT_CANDIDATES)
    }

    /// Stage 2: walk the stylesheet subtrees and take the first file (in
    /// lexical path order) whose contents include the Tailwind marker.
    fn scan_for_marker(&self) -> Option<PathBuf> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        for subtree in SCAN_SUBTREES {
            let subtree_root = self.target_root.join(subtree);
            if !subtree_root.is_dir() {
                continue;
            }
            for entry in WalkDir::new(&subtree_root)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                if entry.file_type().is_file() && has_stylesheet_extension(entry.path()) {
                    candidates.push(entry.into_path());
                }
            }
        }
        // Walk order is filesystem-dependent; a lexical sort makes the
        // winner deterministic when several stylesheets qualify.
        candidates.sort();

        let found = probe::first_match(candidates, |path| file_contains_marker(path));
        found.and_then(|path| {
            path.strip_prefix(&self.target_root)
                .map(Path::to_path_buf)
                .ok()
        })
    }
}

/// True when the path has one of the scanned stylesheet extensions.
fn has_stylesheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCAN_EXTENSIONS.contains(&ext))
}

/// True when the file can be read and contains the Tailwind marker.
/// Unreadable files are logged and treated as non-matches.
fn file_contains_marker(path: &Path) -> bool {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.contains(TAILWIND_MARKER),
        Err(error) => {
            warn!("Skipping unreadable stylesheet {:?}: {}", path, error);
            false
        }
    }
}
