//! Czech Republic variant package.

pub mod greeting;
pub mod name;

use plugpoint_core::{VariantModule, VariantPackage};

/// Module set of the Czech variant.
pub const PACKAGE: VariantPackage = VariantPackage {
    code: "cz",
    location: "plugpoint_variants::cz",
    modules: &[
        VariantModule {
            name: "greeting",
            register: greeting::register,
        },
        VariantModule {
            name: "name",
            register: name::register,
        },
    ],
};
