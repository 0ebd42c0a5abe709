//! # Railshad Stylesheet Patch Operations
//!
//! File: cli/src/common/fs/patch.rs
//!
//! ## Overview
//!
//! This module implements the idempotent text patch the installer applies to
//! the target project's stylesheet entrypoint, plus the relative-path
//! computation that produces the import line to inject. Together they are
//! how an installed stylesheet gets wired into a build pipeline the
//! installer knows nothing else about.
//!
//! ## Architecture
//!
//! Two focused functions:
//! - **`relative_import_path`**: computes the shortest relative path from
//!   the entrypoint's directory to the installed asset using `pathdiff`,
//!   with a bare-filename fallback when no relative path can be computed.
//!   The patcher must always have *some* string to emit.
//! - **`ensure_import`**: reads the entrypoint, and unless some line already
//!   mentions the imported asset, rewrites the file with the import line
//!   prepended. The whole file is written back in one call, so no
//!   partial-write state is observable after return.
//!
//! The injected line goes at the very top of the file, not after existing
//! directives: the imported stylesheet defines CSS custom properties and
//! layers that rules further down consume, and the first line is the one
//! position that precedes every consumer no matter how the file is laid out.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::patch;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let asset = Path::new("/app/root/app/assets/stylesheets/shadcn.css");
//! let entry_dir = Path::new("/app/root/app/assets/tailwind");
//!
//! let rel = patch::relative_import_path(asset, entry_dir);
//! let line = format!("@import \"{}\";", rel);
//! let changed = patch::ensure_import(
//!     Path::new("/app/root/app/assets/tailwind/application.css"),
//!     "shadcn.css",
//!     &line,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io;
use crate::core::error::Result;
use std::path::Path;
use tracing::debug;

/// Computes the relative path string for importing `asset_path` from a file
/// living in `from_dir`.
///
/// Uses standard walk-up-to-common-ancestor semantics (`..` segments, no
/// trailing slash). Both paths are expected to be absolute; when no relative
/// path can be computed (e.g., the paths share no root), the asset's bare
/// filename is returned so the caller still has a usable, if suboptimal,
/// import target.
///
/// # Arguments
///
/// * `asset_path` - Absolute path of the stylesheet being imported.
/// * `from_dir` - Absolute path of the directory containing the importing file.
pub fn relative_import_path(asset_path: &Path, from_dir: &Path) -> String {
    match pathdiff::diff_paths(asset_path, from_dir) {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => {
            debug!(
                "No relative path from {:?} to {:?}; falling back to bare filename",
                from_dir, asset_path
            );
            asset_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| asset_path.display().to_string())
        }
    }
}

/// Prepends `import_line` to the file at `file_path` unless the import is
/// already present.
///
/// "Already present" means any line of the file contains the literal
/// `marker` substring (the imported asset's filename). The check is
/// deliberately loose: a hand-edited import with a different relative path
/// still counts, and the installer leaves it alone.
///
/// When the marker is absent the new content is the import line, a newline,
/// then the original content unchanged, written back in one full-file write.
/// Running this twice with the same arguments leaves the file exactly as
/// after the first run.
///
/// # Arguments
///
/// * `file_path` - The file to patch (typically the stylesheet entrypoint).
/// * `marker` - Substring whose presence on any line means "already imported".
/// * `import_line` - The line to prepend when the marker is absent.
///
/// # Returns
///
/// * `Result<bool>` - `Ok(true)` when the file was modified, `Ok(false)`
///   when the import was already present.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be read or written back.
pub fn ensure_import(file_path: &Path, marker: &str, import_line: &str) -> Result<bool> {
    let contents = io::read_file_to_string(file_path)?;

    if contents.lines().any(|line| line.contains(marker)) {
        debug!(
            "{:?} already references {:?}; leaving file untouched",
            file_path, marker
        );
        return Ok(false);
    }

    let patched = format!("{}\n{}", import_line, contents);
    io::write_string_to_file(file_path, &patched)?;
    debug!("Prepended import line to {:?}", file_path);
    Ok(true)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    // --- relative_import_path ---

    #[test]
    fn test_relative_path_same_directory() {
        let rel = relative_import_path(
            Path::new("/proj/app/assets/stylesheets/shadcn.css"),
            Path::new("/proj/app/assets/stylesheets"),
        );
        assert_eq!(rel, "shadcn.css");
    }

    #[test]
    fn test_relative_path_sibling_directory() {
        // Entrypoint under app/assets/tailwind, asset under app/assets/stylesheets.
        let rel = relative_import_path(
            Path::new("/proj/app/assets/stylesheets/shadcn.css"),
            Path::new("/proj/app/assets/tailwind"),
        );
        assert_eq!(rel, "../stylesheets/shadcn.css");
    }

    #[test]
    fn test_relative_path_across_subtrees() {
        // Entrypoint under app/frontend/stylesheets, two levels up then down.
        let rel = relative_import_path(
            Path::new("/proj/app/assets/stylesheets/shadcn.css"),
            Path::new("/proj/app/frontend/stylesheets"),
        );
        assert_eq!(rel, "../../assets/stylesheets/shadcn.css");
    }

    #[test]
    fn test_relative_path_resolves_back_to_asset() -> Result<()> {
        // Property: joining the entrypoint directory with the computed
        // relative path must land back on the asset's absolute path.
        let root = tempdir()?;
        let asset = root.path().join("app/assets/stylesheets/shadcn.css");
        let entry_dir = root.path().join("app/frontend/stylesheets");
        fs::create_dir_all(asset.parent().unwrap())?;
        fs::create_dir_all(&entry_dir)?;
        fs::write(&asset, "")?;

        let rel = relative_import_path(&asset, &entry_dir);
        let resolved = entry_dir.join(&rel).canonicalize()?;
        assert_eq!(resolved, asset.canonicalize()?);
        Ok(())
    }

    #[test]
    fn test_relative_path_fallback_is_bare_filename() {
        // Mixing a relative asset path with an absolute base defeats the
        // diff; the fallback must still name the file.
        let rel = relative_import_path(
            Path::new("app/assets/stylesheets/shadcn.css"),
            Path::new("/proj/app/assets/tailwind"),
        );
        assert_eq!(rel, "shadcn.css");
    }

    // --- ensure_import ---

    fn entrypoint_with(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let dir = tempdir()?;
        let path = dir.path().join("application.css");
        fs::write(&path, content)?;
        Ok((dir, path))
    }

    #[test]
    fn test_prepends_when_marker_absent() -> Result<()> {
        let (_dir, path) = entrypoint_with("@tailwind base;\n@tailwind utilities;\n")?;

        let changed = ensure_import(&path, "shadcn.css", "@import \"../stylesheets/shadcn.css\";")?;

        assert!(changed);
        assert_eq!(
            fs::read_to_string(&path)?,
            "@import \"../stylesheets/shadcn.css\";\n@tailwind base;\n@tailwind utilities;\n"
        );
        Ok(())
    }

    #[test]
    fn test_skips_when_marker_present() -> Result<()> {
        // A hand-written import with a different path still counts as present.
        let original = "@import \"./shadcn.css\";\n@tailwind base;\n";
        let (_dir, path) = entrypoint_with(original)?;

        let changed = ensure_import(&path, "shadcn.css", "@import \"../stylesheets/shadcn.css\";")?;

        assert!(!changed);
        assert_eq!(fs::read_to_string(&path)?, original);
        Ok(())
    }

    #[test]
    fn test_ensure_import_is_idempotent() -> Result<()> {
        // Applying twice equals applying once.
        let (_dir, path) = entrypoint_with("@tailwind base;\n")?;
        let line = "@import \"../stylesheets/shadcn.css\";";

        let first = ensure_import(&path, "shadcn.css", line)?;
        let after_first = fs::read_to_string(&path)?;
        let second = ensure_import(&path, "shadcn.css", line)?;
        let after_second = fs::read_to_string(&path)?;

        assert!(first);
        assert!(!second);
        assert_eq!(after_first, after_second);
        Ok(())
    }

    #[test]
    fn test_empty_file_gets_import() -> Result<()> {
        let (_dir, path) = entrypoint_with("")?;

        let changed = ensure_import(&path, "shadcn.css", "@import \"shadcn.css\";")?;

        assert!(changed);
        assert_eq!(fs::read_to_string(&path)?, "@import \"shadcn.css\";\n");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing.css");
        assert!(ensure_import(&path, "shadcn.css", "@import \"shadcn.css\";").is_err());
        Ok(())
    }
}
