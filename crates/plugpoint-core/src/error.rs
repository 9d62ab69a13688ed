//! Error types for the extension-point core.

use thiserror::Error;

/// Result alias used across the extension-point core.
pub type Result<T> = std::result::Result<T, PlugpointError>;

/// Errors surfaced by the registry, loader and selector.
///
/// Registry errors are programmer errors in a variant package and are raised
/// synchronously to the offending registration call. Per-module load failures
/// are downgraded to warnings by the loader and never appear here unless a
/// variant loads zero modules.
#[derive(Debug, Error)]
pub enum PlugpointError {
    /// An override was registered against a base that was never declared
    /// pluggable.
    #[error("extension point '{0}' is not declared as pluggable")]
    UnregisteredExtensionPoint(String),

    /// The override does not satisfy the extension point's capability set.
    #[error("override '{override_type}' does not satisfy the capability set of extension point '{point}'")]
    InvalidOverrideType {
        point: String,
        override_type: String,
    },

    /// A mandatory method was invoked on a type that never supplied its own
    /// implementation. Surfaces at call time, not at registration or
    /// construction.
    #[error("'{implementor}' must supply its own implementation of mandatory method '{method}'")]
    MandatoryOverrideMissing {
        method: &'static str,
        implementor: &'static str,
    },

    /// A variant load was requested for a code absent from the catalog.
    #[error("variant '{0}' is not in the catalog")]
    UnknownVariant(String),

    /// Every module of the variant failed to load.
    #[error("variant '{0}' loaded zero modules")]
    EmptyVariant(String),

    /// No selection source (explicit, environment, config file) yielded a
    /// variant code.
    #[error("no variant selected: no explicit code, environment value or config file entry")]
    NoVariantSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = PlugpointError::MandatoryOverrideMissing {
            method: "say_hello",
            implementor: "BaseGreet",
        };
        let msg = err.to_string();
        assert!(msg.contains("say_hello"));
        assert!(msg.contains("BaseGreet"));

        let err = PlugpointError::UnknownVariant("xx".to_string());
        assert!(err.to_string().contains("'xx'"));
    }
}
