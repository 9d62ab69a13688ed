//! Dynamic dispatch wrapper.
//!
//! Construction of a pluggable base capability goes through
//! [`ExtensionRegistry::construct`], which consults the registry and runs the
//! active override's factory when one is registered. Call sites reference
//! only the base capability; the concrete type behind the returned trait
//! object is decided here.
//!
//! Shared ("no-instance") members are defaulted methods on the capability
//! trait, invoked on a prototype value obtained from
//! [`ExtensionRegistry::shared`]. An override that defines the method
//! directly supplies its own body; one that does not inherits the base
//! default, reproducing class-level attribute resolution without faking type
//! identity.

use crate::registry::{ConstructFn, ExtensionRegistry};

/// Compile-time description of a pluggable base capability.
///
/// Implemented by a zero-sized marker type per extension point; the marker
/// carries the point's identity, construction input, produced capability
/// value (typically a boxed trait object) and the base constructor.
pub trait ExtensionPoint: 'static {
    /// Construction input for the capability.
    type Args: 'static;
    /// Capability value produced by construction.
    type Output: 'static;
    /// Stable identity of the extension point.
    const NAME: &'static str;

    /// Name of the base implementation type.
    fn base_type_name() -> &'static str;

    /// Construct the base implementation.
    fn construct_base(args: Self::Args) -> Self::Output;
}

impl ExtensionRegistry {
    /// Construct a value of extension point `P`.
    ///
    /// Runs the active override's own construction logic when one is
    /// registered, the base's otherwise. Undeclared points fall through to
    /// the base constructor, mirroring `resolve_override`'s never-fails
    /// contract.
    pub fn construct<P: ExtensionPoint>(&self, args: P::Args) -> P::Output {
        let Some(entry) = self.entry(P::NAME) else {
            tracing::debug!(point = P::NAME, "point not declared, constructing base");
            return P::construct_base(args);
        };

        let (factory, override_type) = match &entry.active {
            Some(active) => (&active.factory, Some(active.type_name.as_str())),
            None => (&entry.base_factory, None),
        };

        match factory.downcast_ref::<ConstructFn<P::Args, P::Output>>() {
            Some(construct) => {
                match override_type {
                    Some(name) => {
                        tracing::debug!(point = P::NAME, override_type = name, "constructing override")
                    }
                    None => tracing::debug!(point = P::NAME, "no override, constructing base"),
                }
                construct(args)
            }
            None => {
                // Registration validates the produced capability type, so
                // this only happens when two points with different
                // capabilities were declared under one name.
                tracing::error!(point = P::NAME, "stored factory has unexpected type, using base");
                P::construct_base(args)
            }
        }
    }

    /// Prototype value for invoking shared members of `P`.
    ///
    /// Only defined for points constructed without input; the returned value
    /// carries the active override's shared-member definitions.
    pub fn shared<P>(&self) -> P::Output
    where
        P: ExtensionPoint<Args = ()>,
    {
        self.construct::<P>(())
    }
}
