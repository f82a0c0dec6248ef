use core::any::Any;

use crate::info::{Type, impl_type_fn};

/// Type info for types whose internals are not reflected.
///
/// Serializers can only handle such types through a registered type trait.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates the info of opaque type `T`.
    #[inline]
    pub fn new<T: Any>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
