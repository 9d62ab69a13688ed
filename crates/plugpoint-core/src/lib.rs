//! Plugpoint core - runtime extension points with selective variant loading.
//!
//! A host application declares pluggable base capabilities ("extension
//! points"), and separately packaged variants register replacement
//! implementations that transparently substitute for the base. Exactly one
//! variant's overrides become active per process, chosen at startup.
//!
//! The core consists of:
//! - [`ExtensionRegistry`]: table mapping an extension-point name to its base
//!   constructor and, optionally, the active override
//! - Dynamic dispatch ([`ExtensionPoint`], `construct`/`shared`): makes
//!   construction of a base capability produce the override when one is active
//! - Mandatory-override guard ([`guard`]): call-time check that a flagged
//!   method was actually overridden
//! - [`VariantCatalog`] and [`VariantLoader`]: discovery and selective loading
//!   of exactly one variant's module set
//! - [`VariantSelector`]: explicit > environment > config-file precedence
//!
//! # Design Principles
//!
//! 1. **No hidden global state**: the registry is an explicit value that the
//!    loader and dispatch borrow; tests construct independent registries
//! 2. **Transparent substitution**: call sites reference only the base
//!    capability; which concrete variant answers is decided centrally
//! 3. **Best-effort loading**: a broken variant module is a warning, a wholly
//!    broken variant is a load failure
//! 4. **Synchronous and caller-serialized**: no internal locking; concurrent
//!    use must be serialized by the caller

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod guard;
pub mod loader;
pub mod registry;
pub mod selector;

pub use catalog::{RegisterFn, VariantCatalog, VariantModule, VariantPackage};
pub use dispatch::ExtensionPoint;
pub use error::{PlugpointError, Result};
pub use loader::{LoadedVariant, VariantLoader};
pub use registry::{ExtensionRegistry, OverrideRecord, PointInfo};
pub use selector::VariantSelector;
