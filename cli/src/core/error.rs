//! # Railshad Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the railshad installer. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `InstallerError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the installer's domains:
//! - Catalog loading and parsing errors
//! - Filesystem errors
//! - The single fatal precondition: no Tailwind entrypoint in the target
//!
//! Most "missing" conditions in the installer are deliberately *not* errors:
//! a missing template source, an unreadable scan candidate, or an unknown
//! component name are all handled as skips or informational output by the
//! command handlers. Only the conditions modeled here propagate as `Err`.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if entrypoint.is_none() {
//!     anyhow::bail!(InstallerError::TailwindMissing);
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the railshad installer.
#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Catalog document is not valid JSON: {source}")]
    CatalogParse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// The one fatal precondition of the whole install workflow: the target
    /// project has no stylesheet that the Tailwind build pipeline treats as
    /// its entrypoint, so there is nowhere to wire the generated import.
    #[error(
        "railshad requires Tailwind CSS. Add tailwindcss-rails to your Gemfile and run `rails tailwindcss:install` before installing components.\n\
         The installer looks for an application stylesheet that includes Tailwind directives. Supported locations include app/assets/tailwind, app/assets/stylesheets, and app/frontend/stylesheets."
    )]
    TailwindMissing,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let catalog_err = InstallerError::Catalog("missing key 'files'".to_string());
        assert_eq!(
            catalog_err.to_string(),
            "Catalog error: missing key 'files'"
        );

        let fs_err = InstallerError::FileSystem("denied".to_string());
        assert_eq!(fs_err.to_string(), "Filesystem error: denied");

        let tailwind_err = InstallerError::TailwindMissing;
        assert!(tailwind_err
            .to_string()
            .contains("requires Tailwind CSS"));
        assert!(tailwind_err
            .to_string()
            .contains("app/assets/tailwind"));
    }

    #[test]
    fn test_catalog_parse_error_wraps_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("input is intentionally malformed");
        let wrapped = InstallerError::from(parse_err);
        assert!(wrapped
            .to_string()
            .starts_with("Catalog document is not valid JSON"));
    }
}
