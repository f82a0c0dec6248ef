//! MemoryPack-compatible binary serialization driven by compile-time reflection.
//!
//! This crate bundles the workspace crates:
//!
//! - [`reflect`]: `#[derive(Reflect)]`, type info and the type registry.
//! - [`pack`]: the [`MemoryPack`] engine, buffers, codecs and formatters.
//! - [`utils`]: hash states and [`TypeIdMap`](utils::TypeIdMap).
//!
//! Most users only need the [`prelude`].
//!
//! # Examples
//!
//! ```
//! use memorypack::prelude::*;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Message {
//!     #[reflect(order = 1)]
//!     body: String,
//!     #[reflect(order = 0)]
//!     id: u32,
//!     attachments: Option<Vec<u8>>,
//! }
//!
//! let message = Message { body: "ping".into(), id: 7, attachments: None };
//! let bytes = memorypack::serialize(&message).unwrap();
//!
//! // 3 members; `id`, `body`, then the null byte sequence.
//! assert_eq!(bytes[0], 3);
//! assert_eq!(&bytes[1..5], [7, 0, 0, 0]);
//! assert_eq!(&bytes[bytes.len() - 4..], [0xFF; 4]);
//!
//! let mut decoded = Message::default();
//! memorypack::deserialize(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, message);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_pack as pack;
pub use vc_reflect as reflect;
pub use vc_utils as utils;

pub use vc_pack::{MemoryPack, PackConfig, PackError, PackResult, default_engine};
pub use vc_pack::{deserialize, serialize};

/// The types needed to derive, register and pack values.
pub mod prelude {
    pub use vc_pack::{ByteSink, ByteSource, MemoryPack, PackConfig, TextUnit};
    pub use vc_pack::{PackError, PackFormatter, PackResult, TypeTraitFormatter};
    pub use vc_reflect::Reflect;
    pub use vc_reflect::derive::Reflect;
}
