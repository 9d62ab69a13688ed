//! Variant catalog.
//!
//! A variant is a grouped module set (typically one country package) that
//! registers one or more overrides. The catalog maps a short, case-insensitive
//! variant code to that package's descriptor. It is populated by the host from
//! the variant packages linked into the process; the core only reads it.

use std::collections::HashMap;

use crate::error::Result;
use crate::registry::ExtensionRegistry;

/// Registration hook of one variant module. Invoking it is what "loading the
/// module" means: the hook body performs the module's self-registration calls
/// against the registry.
pub type RegisterFn = fn(&mut ExtensionRegistry) -> Result<()>;

/// One module of a variant's module set.
#[derive(Debug, Clone, Copy)]
pub struct VariantModule {
    /// Module name, for diagnostics.
    pub name: &'static str,
    /// Registration hook run when the variant is loaded.
    pub register: RegisterFn,
}

/// Static descriptor of a variant package.
#[derive(Debug, Clone, Copy)]
pub struct VariantPackage {
    /// Short variant code, e.g. `"cz"`.
    pub code: &'static str,
    /// Location of the module set, for diagnostics (module path of the
    /// package).
    pub location: &'static str,
    /// The package's module set. Enumerated explicitly; there is no
    /// package-level initializer to exclude.
    pub modules: &'static [VariantModule],
}

/// Discoverable mapping from variant code to package descriptor.
///
/// Codes are normalized to lowercase on insert and lookup.
#[derive(Debug, Default)]
pub struct VariantCatalog {
    entries: HashMap<String, VariantPackage>,
}

impl VariantCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from the packages linked into the process.
    pub fn from_packages(packages: &[VariantPackage]) -> Self {
        let mut catalog = Self::new();
        for package in packages {
            catalog.insert(*package);
        }
        catalog
    }

    /// Add a package, replacing any entry with the same code.
    pub fn insert(&mut self, package: VariantPackage) {
        let code = package.code.to_lowercase();
        tracing::debug!(code = %code, location = package.location, "discovered variant package");
        self.entries.insert(code, package);
    }

    /// Look up a package by code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<&VariantPackage> {
        self.entries.get(&code.to_lowercase())
    }

    /// All discovered variant codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.entries.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Number of discovered variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no variants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
