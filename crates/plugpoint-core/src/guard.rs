//! Mandatory-override guard.
//!
//! A base capability may flag a method as mandatory while still providing a
//! body: the body is a sentinel that returns
//! [`PlugpointError::MandatoryOverrideMissing`] instead of a result. Default
//! trait-method bodies are monomorphized per implementing type, so the
//! sentinel built with [`mandatory_override_missing`] names the most-derived
//! type that failed to override it.
//!
//! The check is lazy by construction: a variant loads and instantiates fine
//! without the override; the error surfaces only when the flagged method is
//! actually invoked.
//!
//! ```
//! use plugpoint_core::{guard, PlugpointError};
//!
//! trait Pump {
//!     /// Mandatory: every variant must supply its own flow rate.
//!     fn flow_rate(&self) -> Result<u32, PlugpointError> {
//!         Err(guard::mandatory_override_missing::<Self>("flow_rate"))
//!     }
//! }
//!
//! struct StubPump;
//! impl Pump for StubPump {}
//!
//! let err = StubPump.flow_rate().unwrap_err();
//! assert!(err.to_string().contains("StubPump"));
//! ```

use crate::error::PlugpointError;

/// Build the call-time error for a mandatory method whose most-derived
/// implementation is still the base's sentinel body.
pub fn mandatory_override_missing<T: ?Sized>(method: &'static str) -> PlugpointError {
    PlugpointError::MandatoryOverrideMissing {
        method,
        implementor: short_type_name::<T>(),
    }
}

/// Last path segment of a type name, for readable error messages and info
/// maps ("CzechGreet" rather than the full module path).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
