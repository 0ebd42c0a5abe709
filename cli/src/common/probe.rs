//! # Railshad Probe Utilities
//!
//! File: cli/src/common/probe.rs
//!
//! ## Overview
//!
//! The installer answers three different "which one is it?" questions by the
//! same mechanism: walk an ordered list of possibilities and take the first
//! that satisfies a predicate. This module is that mechanism, shared by
//! - the stylesheet entrypoint candidate probe (fixed path list, existence),
//! - the entrypoint content scan (walked file list, marker containment),
//! - the Tailwind config variant probe (fixed extension list, existence).
//!
//! Keeping the three scans on one utility keeps their precedence semantics
//! identical: order of the source list is the total order of preference, and
//! the first match wins regardless of what comes later.
//!
use std::path::{Path, PathBuf};

/// Returns the first item of `items` for which `predicate` returns `true`.
///
/// The input order is preserved; nothing past the first match is evaluated.
///
/// # Arguments
///
/// * `items` - An ordered source of candidates.
/// * `predicate` - Test applied to each candidate in turn.
pub fn first_match<I, T, P>(items: I, mut predicate: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().find(|item| predicate(item))
}

/// Probes `root`-relative candidate paths in order and returns the first
/// that exists as a regular file.
///
/// # Arguments
///
/// * `root` - Directory the candidate paths are resolved against.
/// * `candidates` - Ordered relative paths to test.
///
/// # Returns
///
/// The winning candidate as a `PathBuf` relative to `root`, or `None` when
/// no candidate exists.
pub fn first_existing_file<'a, I>(root: &Path, candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a str>,
{
    first_match(candidates, |candidate| root.join(candidate).is_file())
        .map(PathBuf::from)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_first_match_takes_earliest() {
        let winner = first_match([3, 7, 8, 9], |n| n % 2 == 0);
        assert_eq!(winner, Some(8));

        let none = first_match([1, 3, 5], |n| n % 2 == 0);
        assert_eq!(none, None);
    }

    #[test]
    fn test_first_match_short_circuits() {
        // The predicate must not run past the first hit.
        let mut seen = Vec::new();
        let winner = first_match(["a", "b", "c"], |item| {
            seen.push(*item);
            *item == "b"
        });
        assert_eq!(winner, Some("b"));
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn test_first_existing_file_precedence() -> anyhow::Result<()> {
        let root = tempdir()?;
        fs::create_dir_all(root.path().join("config"))?;
        fs::write(root.path().join("config/b.css"), "")?;
        fs::write(root.path().join("config/c.css"), "")?;

        // b and c both exist; b is listed first, so b wins.
        let found = first_existing_file(
            root.path(),
            ["config/a.css", "config/b.css", "config/c.css"],
        );
        assert_eq!(found, Some(PathBuf::from("config/b.css")));
        Ok(())
    }

    #[test]
    fn test_first_existing_file_ignores_directories() -> anyhow::Result<()> {
        let root = tempdir()?;
        // A directory at a candidate path does not count as a match.
        fs::create_dir_all(root.path().join("app.css"))?;
        fs::write(root.path().join("real.css"), "")?;

        let found = first_existing_file(root.path(), ["app.css", "real.css"]);
        assert_eq!(found, Some(PathBuf::from("real.css")));
        Ok(())
    }

    #[test]
    fn test_first_existing_file_none() -> anyhow::Result<()> {
        let root = tempdir()?;
        assert_eq!(
            first_existing_file(root.path(), ["missing.css", "also-missing.css"]),
            None
        );
        Ok(())
    }
}
