//! Shared service capabilities for the plugpoint host.
//!
//! Defines the pluggable base capabilities the host program is written
//! against - greeting, person name and address formatting - together with
//! their base implementations and extension-point declarations. Country
//! variant packages override these; call sites never name a variant type.

pub mod address;
pub mod error;
pub mod greeting;
pub mod name;

pub use address::{AddressFormat, AddressParts, AddressPoint, BaseAddress};
pub use error::{Result, ServiceError};
pub use greeting::{BaseGreet, Greet, GreeterPoint};
pub use name::{DefaultName, NamePoint, NameSource};

use plugpoint_core::ExtensionRegistry;

/// Declare every service extension point against `registry`.
///
/// The host calls this once at startup, before any variant is loaded.
pub fn declare_all(registry: &mut ExtensionRegistry) {
    greeting::declare(registry);
    name::declare(registry);
    address::declare(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_all_service_points() {
        let mut registry = ExtensionRegistry::new();
        declare_all(&mut registry);
        assert_eq!(
            registry.list_extension_points(),
            vec!["address", "greet", "name"]
        );
    }
}
