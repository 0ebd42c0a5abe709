//! # Railshad Install Utilities (`commands::install::utils`)
//!
//! File: cli/src/commands/install/utils/mod.rs
//!
//! ## Overview
//!
//! Detection helpers specific to the `railshad install` command:
//! which stylesheet is the target's Tailwind entrypoint, and which Tailwind
//! config flavor the target project uses. Both are pure "look, don't touch"
//! modules; the mutations they inform live in the preflight step.
//!
//! ## Architecture
//!
//! - **`entrypoint`**: layered entrypoint discovery (candidate probe, then
//!   content scan) with per-invocation memoization.
//! - **`variant`**: the closed set of Tailwind config flavors, existence
//!   probing with a `.js` default, and the per-flavor integration messages.
//!

/// Stylesheet entrypoint discovery (`EntrypointResolver`).
pub mod entrypoint;
/// Tailwind config flavor detection (`ConfigVariant`).
pub mod variant;
