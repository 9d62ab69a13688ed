//! Variant loader.
//!
//! Loads exactly the selected variant's module set, so only one variant's
//! registrations ever reach the registry in a process. Loading is
//! best-effort: a single broken module must not block the rest of a
//! variant's registrations, but a variant where every module fails is
//! reported as a load failure.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::VariantCatalog;
use crate::error::{PlugpointError, Result};
use crate::registry::ExtensionRegistry;

/// Record of one successfully loaded variant.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedVariant {
    /// Variant code, lowercase.
    pub code: String,
    /// Names of the modules whose registration hooks succeeded.
    pub modules: Vec<String>,
    /// When the variant was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Loads variant module sets against a registry.
///
/// The loaded set is append-only for the life of the process;
/// [`VariantLoader::clear_loaded`] exists for test isolation only. Not
/// internally synchronized; single-loader-at-a-time usage is assumed.
pub struct VariantLoader {
    catalog: VariantCatalog,
    loaded: Vec<LoadedVariant>,
}

impl VariantLoader {
    /// Create a loader over a catalog.
    pub fn new(catalog: VariantCatalog) -> Self {
        Self {
            catalog,
            loaded: Vec::new(),
        }
    }

    /// The catalog this loader reads.
    pub fn catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    /// All discovered variant codes.
    pub fn available_variants(&self) -> Vec<String> {
        self.catalog.codes()
    }

    /// Whether `code` has been loaded in this process.
    pub fn is_loaded(&self, code: &str) -> bool {
        let code = code.to_lowercase();
        self.loaded.iter().any(|v| v.code == code)
    }

    /// Codes of the variants loaded so far, in load order.
    pub fn loaded_variants(&self) -> Vec<String> {
        self.loaded.iter().map(|v| v.code.clone()).collect()
    }

    /// Records of the variants loaded so far.
    pub fn loaded(&self) -> &[LoadedVariant] {
        &self.loaded
    }

    /// Forget every loaded variant. Test support; registrations already made
    /// against a registry are not undone.
    pub fn clear_loaded(&mut self) {
        self.loaded.clear();
    }

    /// Load the module set of `code` against `registry`.
    ///
    /// Idempotent: a code already loaded returns `Ok(())` without re-running
    /// any registration hook. Fails with
    /// [`PlugpointError::UnknownVariant`] for codes absent from the catalog
    /// and [`PlugpointError::EmptyVariant`] when every module of the set
    /// fails; in both cases the loaded set is unchanged. Individual module
    /// failures are logged as warnings and do not abort the load.
    pub fn load_variant(&mut self, registry: &mut ExtensionRegistry, code: &str) -> Result<()> {
        let code = code.trim().to_lowercase();

        if self.is_loaded(&code) {
            tracing::info!(code = %code, "variant already loaded");
            return Ok(());
        }

        let Some(package) = self.catalog.get(&code).copied() else {
            tracing::error!(
                code = %code,
                available = ?self.catalog.codes(),
                "variant not in catalog"
            );
            return Err(PlugpointError::UnknownVariant(code));
        };

        tracing::info!(code = %code, location = package.location, "loading variant");

        let mut modules = Vec::new();
        for module in package.modules {
            match (module.register)(registry) {
                Ok(()) => {
                    tracing::debug!(code = %code, module = module.name, "variant module registered");
                    modules.push(module.name.to_string());
                }
                Err(err) => {
                    tracing::warn!(
                        code = %code,
                        module = module.name,
                        error = %err,
                        "failed to load variant module"
                    );
                }
            }
        }

        if modules.is_empty() {
            tracing::error!(code = %code, location = package.location, "no variant module loaded");
            return Err(PlugpointError::EmptyVariant(code));
        }

        tracing::info!(code = %code, modules = ?modules, "variant loaded");
        self.loaded.push(LoadedVariant {
            code,
            modules,
            loaded_at: Utc::now(),
        });
        Ok(())
    }
}
