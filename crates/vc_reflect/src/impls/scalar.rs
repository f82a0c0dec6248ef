use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef, ScalarMut, ScalarRef};
use crate::registry::{GetTypeMeta, TypeMeta};

macro_rules! impl_reflect_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$variant)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(ScalarRef::$variant(*self))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(ScalarMut::$variant(self))
            }
        }

        impl GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }
    )*};
}

impl_reflect_scalar!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::String)))
    }
}

impl Reflect for String {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(ScalarRef::String(self.as_str()))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(ScalarMut::String(self))
    }
}

impl GetTypeMeta for String {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, Typed};
    use crate::ops::{ReflectMut, ScalarMut, ScalarRef, ReflectRef};
    use alloc::string::String;

    #[test]
    fn scalar_views() {
        let mut value = -5_i64;
        assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(ScalarRef::I64(-5))));
        if let ReflectMut::Scalar(ScalarMut::I64(v)) = value.reflect_mut() {
            *v = 9;
        }
        assert_eq!(value, 9);
    }

    #[test]
    fn string_is_scalar() {
        let info = String::type_info().as_scalar().unwrap();
        assert_eq!(info.scalar_kind(), ScalarKind::String);

        let text = String::from("hi");
        let ReflectRef::Scalar(scalar) = text.reflect_ref() else {
            panic!("expected a scalar");
        };
        assert_eq!(scalar, ScalarRef::String("hi"));
        assert_eq!(scalar.kind(), ScalarKind::String);
    }
}
