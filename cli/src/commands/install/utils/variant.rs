//! # Railshad Tailwind Config Variant Detection
//!
//! File: cli/src/commands/install/utils/variant.rs
//!
//! ## Overview
//!
//! Rails projects write their Tailwind configuration in one of four module
//! flavors, distinguished by file extension: `tailwind.config.ts`, `.mjs`,
//! `.cjs`, or `.js`. The installer ships a matching `shadcn.tailwind.*`
//! template for each flavor and has to pick the one the target project can
//! actually load.
//!
//! ## Architecture
//!
//! `ConfigVariant` is a closed enum over the four flavors. Detection probes
//! `config/tailwind.config.<ext>` for each variant in preference order and
//! takes the first that exists; when the target has no Tailwind config at
//! all, plain `.js` is the default, as the most broadly loadable flavor.
//!
//! Each variant also carries the one-line integration instruction shown to
//! the user after its config template is copied. The instruction text is
//! defined next to the variant so the two sets cannot drift apart.
//!
use crate::common::probe;
use std::fmt;
use std::path::Path;

/// The four Tailwind config flavors the installer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigVariant {
    /// TypeScript (`tailwind.config.ts`).
    Ts,
    /// ES module (`tailwind.config.mjs`).
    Mjs,
    /// CommonJS with explicit extension (`tailwind.config.cjs`).
    Cjs,
    /// Plain JavaScript (`tailwind.config.js`) — the default flavor.
    Js,
}

impl ConfigVariant {
    /// All variants in detection preference order. `Js` is last and doubles
    /// as the default when no config file exists.
    pub const ALL: [ConfigVariant; 4] = [
        ConfigVariant::Ts,
        ConfigVariant::Mjs,
        ConfigVariant::Cjs,
        ConfigVariant::Js,
    ];

    /// The file extension this variant corresponds to.
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigVariant::Ts => "ts",
            ConfigVariant::Mjs => "mjs",
            ConfigVariant::Cjs => "cjs",
            ConfigVariant::Js => "js",
        }
    }

    /// Probes the target project for `config/tailwind.config.<ext>` in
    /// preference order and returns the first flavor present, defaulting to
    /// [`ConfigVariant::Js`] when none exist.
    ///
    /// # Arguments
    ///
    /// * `target_root` - Root directory of the target Rails project.
    pub fn detect(target_root: &Path) -> ConfigVariant {
        probe::first_match(Self::ALL, |variant| {
            target_root
                .join("config")
                .join(format!("tailwind.config.{}", variant.extension()))
                .is_file()
        })
        .unwrap_or(ConfigVariant::Js)
    }

    /// Catalog-relative path of the `shadcn.tailwind` template to copy for
    /// this variant; also its destination path under the target root.
    pub fn config_template_path(&self) -> String {
        format!("config/shadcn.tailwind.{}", self.extension())
    }

    /// The integration instruction printed after this variant's config
    /// template is copied into the target project.
    pub fn integration_message(&self) -> &'static str {
        match self {
            ConfigVariant::Ts => {
                "Import and merge the config in your tailwind.config.ts using `import shadcn from './shadcn.tailwind';`."
            }
            ConfigVariant::Mjs => {
                "Import the config with `import shadcnConfig from './shadcn.tailwind.mjs';` and spread it into your Tailwind config."
            }
            ConfigVariant::Cjs => {
                "Require the config with `const shadcnConfig = require('./shadcn.tailwind.cjs');` and merge it into module.exports."
            }
            ConfigVariant::Js => {
                "Require the config with `const shadcnConfig = require('./shadcn.tailwind.js');` and spread it into module.exports."
            }
        }
    }
}

impl fmt::Display for ConfigVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
