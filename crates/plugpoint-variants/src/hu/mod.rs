//! Hungarian variant package.

pub mod address;
pub mod greeting;
pub mod name;

use plugpoint_core::{VariantModule, VariantPackage};

/// Module set of the Hungarian variant.
pub const PACKAGE: VariantPackage = VariantPackage {
    code: "hu",
    location: "plugpoint_variants::hu",
    modules: &[
        VariantModule {
            name: "greeting",
            register: greeting::register,
        },
        VariantModule {
            name: "name",
            register: name::register,
        },
        VariantModule {
            name: "address",
            register: address::register,
        },
    ],
};
