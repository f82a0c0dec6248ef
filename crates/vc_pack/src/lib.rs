//! A compact, schema-less binary serializer compatible with the MemoryPack
//! wire format.
//!
//! Values are walked through [`vc_reflect`]: structs become an object
//! header followed by their fields in declared order, collections a signed
//! length header followed by their elements, and scalars their
//! little-endian bytes. No field names or type tags are written.
//!
//! ## Menu
//!
//! - [`MemoryPack`]: the engine, with its type registry and schema cache.
//! - [`serialize`] / [`deserialize`]: shortcuts through the [`default_engine`].
//! - [`PackFormatter`]: a hand-written wire format for one type.
//! - [`ByteSink`] / [`ByteSource`]: the buffers, with the codec methods.
//! - [`schema`]: field ordering of structs.
//!
//! ## Example
//!
//! ```
//! use vc_pack::MemoryPack;
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Node {
//!     value: i32,
//!     next: Option<Box<Node>>,
//! }
//!
//! let list = Node {
//!     value: 1,
//!     next: Some(Box::new(Node { value: 2, next: None })),
//! };
//!
//! let engine = MemoryPack::new();
//! let bytes = engine.serialize(&list).unwrap();
//! assert_eq!(bytes, [2, 1, 0, 0, 0, 2, 2, 0, 0, 0, 0xFF]);
//!
//! let mut decoded = Node::default();
//! engine.deserialize(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, list);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Std

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod buffer;
mod config;
mod depth;
mod engine;
mod error;
mod formatter;
mod walker;

pub mod codec;
pub mod schema;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use buffer::{ByteSink, ByteSource};
pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_DEPTH, PackConfig, TextUnit};
pub use depth::DepthGuard;
pub use engine::{MemoryPack, default_engine, deserialize, serialize};
pub use error::{PackError, PackResult};
pub use formatter::{PackFormatter, TypeTraitFormatter};

pub use vc_reflect as reflect;
