use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

/// Type info for owning pointers such as `Box<T>` and `Arc<T>`.
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);

    #[inline]
    pub fn new<TPointer: Any, TPointee: Typed>() -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            pointee_id: TypeId::of::<TPointee>(),
            pointee_info: TPointee::type_info,
        }
    }

    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
