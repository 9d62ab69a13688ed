//! Czech greeting implementation.

use std::collections::HashMap;

use plugpoint_core::ExtensionRegistry;
use plugpoint_services::greeting::{Greet, GreeterPoint};
use plugpoint_services::Result as ServiceResult;

/// Czech-specific greeting.
pub struct CzechGreet;

impl Greet for CzechGreet {
    fn say_hello(&self, name: &str) -> ServiceResult<String> {
        Ok(format!("Ahoj, {name}{}", self.message_end()))
    }

    fn say_hello_again(&self) -> String {
        format!("Ahoj znovu{}", self.message_end())
    }

    fn say_goodbye(&self, name: &str) -> String {
        format!("Na shledanou, {name}{}", self.message_end())
    }

    // Directly defined shared member: answers for the whole point.
    fn message_end(&self) -> String {
        "!".to_string()
    }

    fn greeting_info(&self) -> HashMap<String, String> {
        HashMap::from([
            ("class".to_string(), self.type_name().to_string()),
            ("type".to_string(), "czech_variant".to_string()),
            ("country".to_string(), "cz".to_string()),
            ("language".to_string(), "Czech".to_string()),
        ])
    }
}

fn construct(_: ()) -> Box<dyn Greet> {
    Box::new(CzechGreet)
}

/// Self-registration hook, run by the variant loader.
pub fn register(registry: &mut ExtensionRegistry) -> plugpoint_core::Result<()> {
    registry.register_override::<GreeterPoint, _>("CzechGreet", construct)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn czech_greetings() {
        assert_eq!(CzechGreet.say_hello("World").unwrap(), "Ahoj, World!");
        assert_eq!(CzechGreet.say_hello_again(), "Ahoj znovu!");
        assert_eq!(CzechGreet.say_goodbye("World"), "Na shledanou, World!");
        assert_eq!(CzechGreet.message_end(), "!");
    }

    #[test]
    fn info_identifies_the_variant() {
        let info = CzechGreet.greeting_info();
        assert_eq!(info.get("class").map(String::as_str), Some("CzechGreet"));
        assert_eq!(info.get("country").map(String::as_str), Some("cz"));
    }
}
