//! Deployment contract constants.
//!
//! The exact environment variable and config-file names are a contract fixed
//! by the host deployment, not by the core's design; the defaults live here
//! so host and tests agree on them. [`crate::VariantSelector`] accepts
//! overrides for both.

/// Environment variable names.
pub mod env_vars {
    /// Variant code consulted when no explicit code is given.
    pub const VARIANT: &str = "PLUGPOINT_VARIANT";
}

/// Well-known file names.
pub mod files {
    /// Config file whose first non-empty line is the variant code.
    pub const VARIANT_CONFIG: &str = "variant.conf";
}
