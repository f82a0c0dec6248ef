//! Built-in reflection impls and the storage cells used by [`Typed`](crate::info::Typed).
//!
//! | Kind | Types |
//! |---|---|
//! | scalar | `bool`, `i8`–`i64`, `isize`, `u8`–`u64`, `usize`, `f32`, `f64`, `String` |
//! | list | `Vec<T>` |
//! | array | `[T; N]` |
//! | map | `HashMap<K, V, S>`, `BTreeMap<K, V>` |
//! | optional | `Option<T>` |
//! | pointer | `Box<T>`, `Arc<T>` |
//! | opaque | `()`, `char`, `i128`, `u128` |
//!
//! Containers that create items while being filled (`Vec`, maps, `Option`)
//! require the item types to implement [`Default`].

// -----------------------------------------------------------------------------
// Modules

mod array;
mod cell;
mod map;
mod opaque;
mod option;
mod pointer;
mod scalar;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
