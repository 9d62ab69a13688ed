//! Extension-point registry.
//!
//! The registry is the process table behind transparent substitution: it maps
//! an extension-point name to the base constructor and, optionally, the
//! currently active override. It is an explicit value (no hidden singleton);
//! the variant loader and the dispatch wrapper borrow it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::ExtensionPoint;
use crate::error::{PlugpointError, Result};

/// Type-erased construction hook. The concrete type behind the `dyn Any`
/// boxes below is always `ConstructFn<P::Args, P::Output>` for the point `P`
/// the hook was registered through.
pub(crate) type ConstructFn<A, O> = Arc<dyn Fn(A) -> O + Send + Sync>;

fn capability_type_of<P: ExtensionPoint>() -> TypeId {
    TypeId::of::<ConstructFn<P::Args, P::Output>>()
}

/// An override candidate carried through the dynamic registration path.
///
/// Built with [`OverrideRecord::new`], which captures the capability type the
/// factory produces so [`ExtensionRegistry::register_override_record`] can
/// validate it against the targeted point at registration time.
pub struct OverrideRecord {
    type_name: String,
    capability_type: TypeId,
    factory: Box<dyn Any + Send + Sync>,
}

impl OverrideRecord {
    /// Wrap a factory for extension point `P`.
    pub fn new<P, F>(type_name: impl Into<String>, factory: F) -> Self
    where
        P: ExtensionPoint,
        F: Fn(P::Args) -> P::Output + Send + Sync + 'static,
    {
        let construct: ConstructFn<P::Args, P::Output> = Arc::new(factory);
        Self {
            type_name: type_name.into(),
            capability_type: capability_type_of::<P>(),
            factory: Box::new(construct),
        }
    }

    /// Name of the overriding type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

pub(crate) struct ActiveOverride {
    pub(crate) type_name: String,
    pub(crate) factory: Box<dyn Any + Send + Sync>,
}

pub(crate) struct PointEntry {
    pub(crate) base_type_name: &'static str,
    pub(crate) capability_type: TypeId,
    pub(crate) base_factory: Box<dyn Any + Send + Sync>,
    pub(crate) metadata: HashMap<String, Value>,
    pub(crate) active: Option<ActiveOverride>,
}

/// Snapshot of a declared extension point, for introspection and the host's
/// JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PointInfo {
    /// Extension-point identity.
    pub name: String,
    /// Name of the base implementation type.
    pub base_type: String,
    /// Name of the active override type, if one is registered.
    pub active_override: Option<String>,
    /// Opaque metadata recorded at declaration.
    pub metadata: HashMap<String, Value>,
}

/// Process table of extension points and their active overrides.
///
/// Not internally synchronized; concurrent use must be serialized by the
/// caller.
#[derive(Default)]
pub struct ExtensionRegistry {
    points: HashMap<String, PointEntry>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `P` as pluggable. Idempotent: redeclaring overwrites the
    /// metadata and keeps any active override.
    pub fn declare<P: ExtensionPoint>(&mut self, metadata: HashMap<String, Value>) {
        let entry = self
            .points
            .entry(P::NAME.to_string())
            .or_insert_with(|| PointEntry {
                base_type_name: P::base_type_name(),
                capability_type: capability_type_of::<P>(),
                base_factory: Box::new(Arc::new(P::construct_base)
                    as ConstructFn<P::Args, P::Output>),
                metadata: HashMap::new(),
                active: None,
            });
        entry.metadata = metadata;
        tracing::info!(point = P::NAME, base = P::base_type_name(), "declared extension point");
    }

    /// Register an override for extension point `P`.
    ///
    /// The factory's signature ties the override to `P`'s capability set at
    /// compile time, so this path can only fail with
    /// [`PlugpointError::UnregisteredExtensionPoint`].
    ///
    /// Returns the type name of the override that was replaced, if any;
    /// replacement is last-registration-wins and is logged, not an error.
    pub fn register_override<P, F>(&mut self, type_name: &str, factory: F) -> Result<Option<String>>
    where
        P: ExtensionPoint,
        F: Fn(P::Args) -> P::Output + Send + Sync + 'static,
    {
        self.register_override_record(P::NAME, OverrideRecord::new::<P, F>(type_name, factory))
    }

    /// Register an override candidate against a point looked up by name.
    ///
    /// Fails with [`PlugpointError::UnregisteredExtensionPoint`] if `point`
    /// was never declared, and with [`PlugpointError::InvalidOverrideType`]
    /// if the record's factory does not produce the point's capability type.
    pub fn register_override_record(
        &mut self,
        point: &str,
        record: OverrideRecord,
    ) -> Result<Option<String>> {
        let entry = self
            .points
            .get_mut(point)
            .ok_or_else(|| PlugpointError::UnregisteredExtensionPoint(point.to_string()))?;

        if record.capability_type != entry.capability_type {
            return Err(PlugpointError::InvalidOverrideType {
                point: point.to_string(),
                override_type: record.type_name,
            });
        }

        let replaced = entry.active.take().map(|prev| prev.type_name);
        if let Some(previous) = &replaced {
            tracing::warn!(
                point,
                previous = %previous,
                new = %record.type_name,
                "replacing existing override"
            );
        }
        tracing::info!(point, override_type = %record.type_name, "registered override");
        entry.active = Some(ActiveOverride {
            type_name: record.type_name,
            factory: record.factory,
        });
        Ok(replaced)
    }

    /// Name of the type that currently answers for `P`: the active override,
    /// or the base itself when none is registered. Never fails.
    pub fn resolve_override<P: ExtensionPoint>(&self) -> &str {
        match self.points.get(P::NAME).and_then(|e| e.active.as_ref()) {
            Some(active) => active.type_name.as_str(),
            None => P::base_type_name(),
        }
    }

    /// Name of the active override for a point, if any.
    pub fn active_override(&self, point: &str) -> Option<&str> {
        self.points
            .get(point)?
            .active
            .as_ref()
            .map(|a| a.type_name.as_str())
    }

    /// Names of all declared extension points, sorted.
    pub fn list_extension_points(&self) -> Vec<String> {
        let mut names: Vec<String> = self.points.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether `point` has been declared.
    pub fn is_declared(&self, point: &str) -> bool {
        self.points.contains_key(point)
    }

    /// Snapshot of a declared point.
    pub fn point_info(&self, point: &str) -> Option<PointInfo> {
        self.points.get(point).map(|entry| PointInfo {
            name: point.to_string(),
            base_type: entry.base_type_name.to_string(),
            active_override: entry.active.as_ref().map(|a| a.type_name.clone()),
            metadata: entry.metadata.clone(),
        })
    }

    /// Snapshots of every declared point, sorted by name.
    pub fn infos(&self) -> Vec<PointInfo> {
        self.list_extension_points()
            .iter()
            .filter_map(|name| self.point_info(name))
            .collect()
    }

    pub(crate) fn entry(&self, point: &str) -> Option<&PointEntry> {
        self.points.get(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Token: Send + Sync {
        fn value(&self) -> &'static str;
    }

    struct BaseToken;
    impl Token for BaseToken {
        fn value(&self) -> &'static str {
            "base"
        }
    }

    struct AltToken;
    impl Token for AltToken {
        fn value(&self) -> &'static str {
            "alt"
        }
    }

    struct TokenPoint;
    impl ExtensionPoint for TokenPoint {
        type Args = ();
        type Output = Box<dyn Token>;
        const NAME: &'static str = "token";

        fn base_type_name() -> &'static str {
            "BaseToken"
        }

        fn construct_base(_: ()) -> Box<dyn Token> {
            Box::new(BaseToken)
        }
    }

    trait Label: Send + Sync {
        fn label(&self) -> String;
    }

    struct BaseLabel;
    impl Label for BaseLabel {
        fn label(&self) -> String {
            "base".to_string()
        }
    }

    struct LabelPoint;
    impl ExtensionPoint for LabelPoint {
        type Args = ();
        type Output = Box<dyn Label>;
        const NAME: &'static str = "label";

        fn base_type_name() -> &'static str {
            "BaseLabel"
        }

        fn construct_base(_: ()) -> Box<dyn Label> {
            Box::new(BaseLabel)
        }
    }

    fn make_alt(_: ()) -> Box<dyn Token> {
        Box::new(AltToken)
    }

    #[test]
    fn register_against_undeclared_point_fails() {
        let mut registry = ExtensionRegistry::new();
        let err = registry
            .register_override::<TokenPoint, _>("AltToken", make_alt)
            .unwrap_err();
        assert!(matches!(err, PlugpointError::UnregisteredExtensionPoint(p) if p == "token"));
    }

    #[test]
    fn resolve_returns_base_before_any_override() {
        let mut registry = ExtensionRegistry::new();
        registry.declare::<TokenPoint>(HashMap::new());
        assert_eq!(registry.resolve_override::<TokenPoint>(), "BaseToken");
        assert_eq!(registry.active_override("token"), None);
    }

    #[test]
    fn last_registration_wins_and_replacement_is_observable() {
        let mut registry = ExtensionRegistry::new();
        registry.declare::<TokenPoint>(HashMap::new());

        let replaced = registry
            .register_override::<TokenPoint, _>("AltToken", make_alt)
            .unwrap();
        assert_eq!(replaced, None);

        let replaced = registry
            .register_override::<TokenPoint, _>("OtherToken", make_alt)
            .unwrap();
        assert_eq!(replaced.as_deref(), Some("AltToken"));
        assert_eq!(registry.resolve_override::<TokenPoint>(), "OtherToken");
    }

    #[test]
    fn mismatched_capability_is_rejected() {
        let mut registry = ExtensionRegistry::new();
        registry.declare::<TokenPoint>(HashMap::new());
        registry.declare::<LabelPoint>(HashMap::new());

        // A token factory registered against the label point.
        let record = OverrideRecord::new::<TokenPoint, _>("AltToken", make_alt);
        let err = registry.register_override_record("label", record).unwrap_err();
        assert!(matches!(
            err,
            PlugpointError::InvalidOverrideType { point, override_type }
                if point == "label" && override_type == "AltToken"
        ));
        assert_eq!(registry.active_override("label"), None);
    }

    #[test]
    fn redeclare_overwrites_metadata_and_keeps_override() {
        let mut registry = ExtensionRegistry::new();
        let mut metadata = HashMap::new();
        metadata.insert("service".to_string(), Value::from("token"));
        registry.declare::<TokenPoint>(metadata);

        registry
            .register_override::<TokenPoint, _>("AltToken", make_alt)
            .unwrap();

        let mut metadata = HashMap::new();
        metadata.insert("revision".to_string(), Value::from(2));
        registry.declare::<TokenPoint>(metadata);

        let info = registry.point_info("token").unwrap();
        assert!(info.metadata.contains_key("revision"));
        assert!(!info.metadata.contains_key("service"));
        assert_eq!(info.active_override.as_deref(), Some("AltToken"));
    }

    #[test]
    fn listing_is_sorted() {
        let mut registry = ExtensionRegistry::new();
        registry.declare::<TokenPoint>(HashMap::new());
        registry.declare::<LabelPoint>(HashMap::new());
        assert_eq!(registry.list_extension_points(), vec!["label", "token"]);
    }
}
