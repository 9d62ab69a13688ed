//! Greeting capability.
//!
//! `say_hello` is mandatory: the base body is a guard sentinel, so invoking
//! it on an implementation that never overrode it fails at call time. The
//! terminator (`message_end`) is the shared member variants may define
//! directly; the remaining operations have usable base definitions.

use std::collections::HashMap;

use plugpoint_core::{guard, ExtensionPoint, ExtensionRegistry};
use serde_json::Value;

use crate::error::Result;

/// Base greeting capability, overridable per country variant.
pub trait Greet: Send + Sync {
    /// Name of the concrete implementation, for info maps and errors.
    fn type_name(&self) -> &'static str {
        guard::short_type_name::<Self>()
    }

    /// Greet someone. Mandatory: every variant must supply its own
    /// implementation; the base body only reports the missing override.
    fn say_hello(&self, name: &str) -> Result<String> {
        let _ = name;
        Err(guard::mandatory_override_missing::<Self>("say_hello").into())
    }

    /// Secondary greeting operation.
    fn say_hello_again(&self) -> String {
        format!("Hello again{}", self.message_end())
    }

    /// Say goodbye. Variants may override.
    fn say_goodbye(&self, name: &str) -> String {
        format!("Goodbye, {name}{}", self.message_end())
    }

    /// Shared terminator member. Invoked through a prototype from the
    /// registry; a variant that defines it directly answers for the whole
    /// extension point.
    fn message_end(&self) -> String {
        ".".to_string()
    }

    /// Details about this greeting implementation.
    fn greeting_info(&self) -> HashMap<String, String> {
        HashMap::from([
            ("class".to_string(), self.type_name().to_string()),
            ("type".to_string(), "base".to_string()),
        ])
    }
}

/// Base implementation; `say_hello` is deliberately left as the sentinel.
pub struct BaseGreet;

impl Greet for BaseGreet {}

/// Extension-point marker for [`Greet`].
pub struct GreeterPoint;

impl ExtensionPoint for GreeterPoint {
    type Args = ();
    type Output = Box<dyn Greet>;
    const NAME: &'static str = "greet";

    fn base_type_name() -> &'static str {
        "BaseGreet"
    }

    fn construct_base(_: ()) -> Box<dyn Greet> {
        Box::new(BaseGreet)
    }
}

/// Declare the greeting extension point.
pub fn declare(registry: &mut ExtensionRegistry) {
    let metadata = HashMap::from([
        ("service".to_string(), Value::from("greeting")),
        ("mandatory".to_string(), Value::from(vec!["say_hello"])),
    ]);
    registry.declare::<GreeterPoint>(metadata);
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugpoint_core::PlugpointError;

    #[test]
    fn base_hello_reports_missing_override() {
        let err = BaseGreet.say_hello("World").unwrap_err();
        match err {
            crate::ServiceError::Core(PlugpointError::MandatoryOverrideMissing {
                method,
                implementor,
            }) => {
                assert_eq!(method, "say_hello");
                assert_eq!(implementor, "BaseGreet");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn base_defaults_are_usable() {
        assert_eq!(BaseGreet.say_goodbye("World"), "Goodbye, World.");
        assert_eq!(BaseGreet.say_hello_again(), "Hello again.");
        assert_eq!(BaseGreet.message_end(), ".");
    }

    #[test]
    fn base_info_names_the_type() {
        let info = BaseGreet.greeting_info();
        assert_eq!(info.get("class").map(String::as_str), Some("BaseGreet"));
        assert_eq!(info.get("type").map(String::as_str), Some("base"));
    }

    #[test]
    fn guard_is_transparent_for_direct_overrides() {
        struct TestGreet;
        impl Greet for TestGreet {
            fn say_hello(&self, name: &str) -> Result<String> {
                Ok(format!("Hi, {name}"))
            }
        }

        assert_eq!(TestGreet.say_hello("World").unwrap(), "Hi, World");
    }
}
