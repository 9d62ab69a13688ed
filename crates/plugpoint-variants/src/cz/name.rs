//! Czech name implementation.

use plugpoint_core::ExtensionRegistry;
use plugpoint_services::name::{NamePoint, NameSource};

/// Czech-specific name source.
pub struct CzechName;

impl NameSource for CzechName {
    fn get(&self) -> String {
        "České Jméno".to_string()
    }
}

fn construct(_: ()) -> Box<dyn NameSource> {
    Box::new(CzechName)
}

/// Self-registration hook, run by the variant loader.
pub fn register(registry: &mut ExtensionRegistry) -> plugpoint_core::Result<()> {
    registry.register_override::<NamePoint, _>("CzechName", construct)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn czech_name() {
        assert_eq!(CzechName.get(), "České Jméno");
    }
}
