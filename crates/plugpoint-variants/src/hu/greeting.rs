//! Hungarian greeting implementation.
//!
//! Does not define the shared terminator; the base definition answers for
//! shared-member access while this variant is active.

use std::collections::HashMap;

use plugpoint_core::ExtensionRegistry;
use plugpoint_services::greeting::{Greet, GreeterPoint};
use plugpoint_services::Result as ServiceResult;

/// Hungarian-specific greeting.
pub struct HungarianGreet;

impl Greet for HungarianGreet {
    fn say_hello(&self, name: &str) -> ServiceResult<String> {
        Ok(format!("Szia, {name}!"))
    }

    fn say_goodbye(&self, name: &str) -> String {
        format!("Viszlát, {name}!")
    }

    fn greeting_info(&self) -> HashMap<String, String> {
        HashMap::from([
            ("class".to_string(), self.type_name().to_string()),
            ("type".to_string(), "hungarian_variant".to_string()),
            ("country".to_string(), "hu".to_string()),
            ("language".to_string(), "Hungarian".to_string()),
        ])
    }
}

fn construct(_: ()) -> Box<dyn Greet> {
    Box::new(HungarianGreet)
}

/// Self-registration hook, run by the variant loader.
pub fn register(registry: &mut ExtensionRegistry) -> plugpoint_core::Result<()> {
    registry.register_override::<GreeterPoint, _>("HungarianGreet", construct)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hungarian_greetings() {
        assert_eq!(HungarianGreet.say_hello("World").unwrap(), "Szia, World!");
        assert_eq!(HungarianGreet.say_goodbye("World"), "Viszlát, World!");
    }

    #[test]
    fn terminator_and_secondary_greeting_are_inherited() {
        assert_eq!(HungarianGreet.message_end(), ".");
        assert_eq!(HungarianGreet.say_hello_again(), "Hello again.");
    }
}
