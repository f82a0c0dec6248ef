use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

/// Type info for values that may be absent.
#[derive(Clone, Debug)]
pub struct OptionalInfo {
    ty: Type,
    some_id: TypeId,
    some_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    #[inline]
    pub fn new<TOption: Any, TSome: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            some_id: TypeId::of::<TSome>(),
            some_info: TSome::type_info,
        }
    }

    /// The [`TypeId`] of the wrapped type.
    #[inline]
    pub const fn some_id(&self) -> TypeId {
        self.some_id
    }

    /// The [`TypeInfo`] of the wrapped type.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
