//! Person-name capability.
//!
//! The original service exposed a single class-level `get()`; here it is a
//! shared member invoked through a registry prototype.

use std::collections::HashMap;

use plugpoint_core::{guard, ExtensionPoint, ExtensionRegistry};
use serde_json::Value;

/// Source of the person name used by the host.
pub trait NameSource: Send + Sync {
    /// Name of the concrete implementation.
    fn type_name(&self) -> &'static str {
        guard::short_type_name::<Self>()
    }

    /// The person name. Shared member; variants define their own.
    fn get(&self) -> String {
        "Default Name".to_string()
    }
}

/// Base implementation.
pub struct DefaultName;

impl NameSource for DefaultName {}

/// Extension-point marker for [`NameSource`].
pub struct NamePoint;

impl ExtensionPoint for NamePoint {
    type Args = ();
    type Output = Box<dyn NameSource>;
    const NAME: &'static str = "name";

    fn base_type_name() -> &'static str {
        "DefaultName"
    }

    fn construct_base(_: ()) -> Box<dyn NameSource> {
        Box::new(DefaultName)
    }
}

/// Declare the name extension point.
pub fn declare(registry: &mut ExtensionRegistry) {
    let metadata = HashMap::from([("service".to_string(), Value::from("name"))]);
    registry.declare::<NamePoint>(metadata);
}
