//! Hungarian address implementation.
//!
//! Hungarian postal codes are exactly four digits; components are joined
//! with `": "` rather than the base's comma.

use plugpoint_core::ExtensionRegistry;
use plugpoint_services::address::{AddressFormat, AddressParts, AddressPoint};

/// Hungarian-specific address format.
pub struct HungarianAddress {
    parts: AddressParts,
}

impl HungarianAddress {
    pub fn new(parts: AddressParts) -> Self {
        Self { parts }
    }
}

impl AddressFormat for HungarianAddress {
    fn parts(&self) -> &AddressParts {
        &self.parts
    }

    fn country(&self) -> &str {
        "HU"
    }

    fn separator(&self) -> &str {
        ": "
    }

    fn validate_postal_code(&self, postal_code: &str) -> bool {
        let postal_code = postal_code.trim();
        postal_code.len() == 4 && postal_code.chars().all(|c| c.is_ascii_digit())
    }
}

fn construct(parts: AddressParts) -> Box<dyn AddressFormat> {
    Box::new(HungarianAddress::new(parts))
}

/// Self-registration hook, run by the variant loader.
pub fn register(registry: &mut ExtensionRegistry) -> plugpoint_core::Result<()> {
    registry.register_override::<AddressPoint, _>("HungarianAddress", construct)?;
    Ok(())
}
