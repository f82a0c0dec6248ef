//! Field schemas of reflected structs.
//!
//! A [`TypeSchema`] is the ordered list of packed fields of one struct type,
//! resolved once from its [`StructInfo`](vc_reflect::info::StructInfo) and
//! shared through a [`SchemaCache`].

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod descriptor;
mod resolver;

// -----------------------------------------------------------------------------
// Exports

pub use cache::SchemaCache;
pub use descriptor::{FieldDescriptor, TypeSchema};
pub use resolver::resolve_schema;
