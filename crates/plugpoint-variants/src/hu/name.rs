//! Hungarian name implementation.

use plugpoint_core::ExtensionRegistry;
use plugpoint_services::name::{NamePoint, NameSource};

/// Hungarian-specific name source.
pub struct HungarianName;

impl NameSource for HungarianName {
    fn get(&self) -> String {
        "Magyar Név".to_string()
    }
}

fn construct(_: ()) -> Box<dyn NameSource> {
    Box::new(HungarianName)
}

/// Self-registration hook, run by the variant loader.
pub fn register(registry: &mut ExtensionRegistry) -> plugpoint_core::Result<()> {
    registry.register_override::<NamePoint, _>("HungarianName", construct)?;
    Ok(())
}
