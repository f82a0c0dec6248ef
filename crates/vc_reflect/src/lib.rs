//! Compile-time generated reflection for the pack serializer.
//!
//! A reflected type describes itself through a static [`TypeInfo`] and
//! exposes a kind-specific view of its values through [`Reflect::reflect_ref`]
//! and [`Reflect::reflect_mut`]. The set of kinds is closed (see
//! [`ReflectKind`]), so consumers dispatch with an exhaustive `match` instead
//! of runtime type inspection.
//!
//! ## Menu
//!
//! - [`Reflect`]: the core trait, derived with [`derive::Reflect`].
//! - [`info`]: static type information, [`Typed`] and the field descriptors.
//! - [`ops`]: the views returned by `reflect_ref` and `reflect_mut`.
//! - [`impls`]: built-in impls and the type info cells.
//! - [`registry`]: per-type capabilities, see [`TypeRegistry`].
//!
//! ## Example
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect};
//! use vc_reflect::info::{ReflectKind, Typed};
//! use vc_reflect::ops::{ReflectRef, Struct};
//!
//! #[derive(Reflect, Default)]
//! struct Player {
//!     #[reflect(order = 1)]
//!     name: String,
//!     #[reflect(order = 0)]
//!     score: u32,
//!     friends: Vec<String>,
//! }
//!
//! let player = Player { name: "ann".into(), score: 3, friends: vec![] };
//!
//! let ReflectRef::Struct(view) = player.reflect_ref() else { unreachable!() };
//! assert_eq!(view.field("score").unwrap().downcast_ref::<u32>(), Some(&3));
//!
//! let info = Player::type_info().as_struct().unwrap();
//! assert_eq!(info.field("name").unwrap().order(), Some(1));
//! assert_eq!(info.field("friends").unwrap().type_info().unwrap().kind(), ReflectKind::List);
//! ```
//!
//! [`TypeInfo`]: info::TypeInfo
//! [`ReflectKind`]: info::ReflectKind
//! [`Typed`]: info::Typed
//! [`TypeRegistry`]: registry::TypeRegistry
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `vc_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `vc_reflect` can be used as an alias for `crate`.
extern crate self as vc_reflect;

// -----------------------------------------------------------------------------
// Std

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
