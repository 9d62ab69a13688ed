//! Address-formatting capability.
//!
//! The only extension point with construction input: an address value is
//! built from street, city and postal code, and the active variant decides
//! separator, country and postal-code validation.

use std::collections::HashMap;

use plugpoint_core::{guard, ExtensionPoint, ExtensionRegistry};
use serde_json::Value;

use crate::error::{Result, ServiceError};

/// Construction input for an address value.
#[derive(Debug, Clone)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl AddressParts {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// Address-formatting capability, overridable per country variant.
pub trait AddressFormat: Send + Sync {
    /// Name of the concrete implementation.
    fn type_name(&self) -> &'static str {
        guard::short_type_name::<Self>()
    }

    /// The parts this value was constructed from.
    fn parts(&self) -> &AddressParts;

    /// Country code of this format.
    fn country(&self) -> &str {
        "US"
    }

    /// Separator between address components.
    fn separator(&self) -> &str {
        ", "
    }

    /// Whether `postal_code` is acceptable for this country. The base
    /// accepts anything non-blank.
    fn validate_postal_code(&self, postal_code: &str) -> bool {
        !postal_code.trim().is_empty()
    }

    /// Format the address, validating the postal code first.
    fn format(&self) -> Result<String> {
        let parts = self.parts();
        if !self.validate_postal_code(&parts.postal_code) {
            return Err(ServiceError::InvalidPostalCode(parts.postal_code.clone()));
        }
        let sep = self.separator();
        Ok(format!(
            "{}{sep}{}{sep}{}",
            parts.street, parts.city, parts.postal_code
        ))
    }

    /// Details about this address implementation.
    fn address_info(&self) -> HashMap<String, String> {
        HashMap::from([
            ("class".to_string(), self.type_name().to_string()),
            ("country".to_string(), self.country().to_string()),
            ("separator".to_string(), self.separator().to_string()),
        ])
    }
}

/// Base address format (US conventions).
pub struct BaseAddress {
    parts: AddressParts,
}

impl BaseAddress {
    pub fn new(parts: AddressParts) -> Self {
        Self { parts }
    }
}

impl AddressFormat for BaseAddress {
    fn parts(&self) -> &AddressParts {
        &self.parts
    }
}

/// Extension-point marker for [`AddressFormat`].
pub struct AddressPoint;

impl ExtensionPoint for AddressPoint {
    type Args = AddressParts;
    type Output = Box<dyn AddressFormat>;
    const NAME: &'static str = "address";

    fn base_type_name() -> &'static str {
        "BaseAddress"
    }

    fn construct_base(parts: AddressParts) -> Box<dyn AddressFormat> {
        Box::new(BaseAddress::new(parts))
    }
}

/// Declare the address extension point.
pub fn declare(registry: &mut ExtensionRegistry) {
    let metadata = HashMap::from([("service".to_string(), Value::from("address"))]);
    registry.declare::<AddressPoint>(metadata);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(postal_code: &str) -> BaseAddress {
        BaseAddress::new(AddressParts::new("123 Main Street", "Springfield", postal_code))
    }

    #[test]
    fn base_formats_with_comma_separator() {
        let formatted = base("12345").format().unwrap();
        assert_eq!(formatted, "123 Main Street, Springfield, 12345");
    }

    #[test]
    fn base_rejects_blank_postal_code() {
        for code in ["", "   "] {
            let err = base(code).format().unwrap_err();
            assert!(matches!(err, ServiceError::InvalidPostalCode(_)));
        }
    }

    #[test]
    fn base_info() {
        let info = base("12345").address_info();
        assert_eq!(info.get("class").map(String::as_str), Some("BaseAddress"));
        assert_eq!(info.get("country").map(String::as_str), Some("US"));
        assert_eq!(info.get("separator").map(String::as_str), Some(", "));
    }
}
