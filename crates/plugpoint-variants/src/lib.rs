//! Country variant packages.
//!
//! Each submodule is one variant's module set; each module exposes a
//! `register` hook that performs its self-registration against the
//! extension-point registry when the variant loader runs it. [`PACKAGES`] is
//! what the host feeds the catalog - the process-visible equivalent of an
//! installed-package entry point namespace.

pub mod cz;
pub mod hu;

use plugpoint_core::VariantPackage;

/// Every variant package linked into this crate.
pub const PACKAGES: &[VariantPackage] = &[cz::PACKAGE, hu::PACKAGE];

#[cfg(test)]
mod tests {
    use super::*;
    use plugpoint_core::VariantCatalog;

    #[test]
    fn all_packages_are_discoverable() {
        let catalog = VariantCatalog::from_packages(PACKAGES);
        assert_eq!(catalog.codes(), vec!["cz", "hu"]);
    }
}
