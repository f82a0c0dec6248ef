//! Kind-specific views of reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) and
//! [`Reflect::reflect_mut`](crate::Reflect::reflect_mut) return a
//! [`ReflectRef`] / [`ReflectMut`], whose variants expose the trait for the
//! value's kind: [`Struct`], [`List`], [`Array`], [`Map`], [`Optional`],
//! [`Pointer`], or the scalar value itself.

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod optional_ops;
mod pointer_ops;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use array_ops::{Array, ArrayIter};
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListIter};
pub use map_ops::{Map, MapIter};
pub use optional_ops::Optional;
pub use pointer_ops::Pointer;
pub use scalar::{ScalarMut, ScalarRef};
pub use struct_ops::{Struct, StructFieldIter};
