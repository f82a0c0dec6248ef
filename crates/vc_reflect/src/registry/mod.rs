//! Type registry for information that is not reachable from a value.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability supported by a type, stored type-erased.
//! - [`FromType`]: creates a `TypeTrait` for a concrete type.
//! - [`TypeMeta`]: a [`TypeInfo`] plus a table of `TypeTrait`s.
//! - [`GetTypeMeta`]: creates the `TypeMeta` of a type and registers its dependencies.
//! - [`TypeRegistry`]: the container of `TypeMeta`s, keyed by [`TypeId`].
//! - [`TypeRegistryArc`]: a shared, lock-protected registry.
//!
//! Capabilities are attached with `#[reflect(type_trait = Path)]` on the
//! derive, or at runtime through [`TypeRegistry::register_type_trait`].
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
