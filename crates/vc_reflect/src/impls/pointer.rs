use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{PointerInfo, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectMut, ReflectRef};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

macro_rules! impl_reflect_pointer {
    ($ptr:ident, |$this:ident| $pointee_mut:expr) => {
        impl<T: Reflect + Typed> Typed for $ptr<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ptr<T> {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Pointer(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Pointer(self)
            }
        }

        impl<T: Reflect + Typed> Pointer for $ptr<T> {
            #[inline]
            fn pointee(&self) -> &dyn Reflect {
                &**self
            }

            #[inline]
            fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
                let $this = self;
                $pointee_mut
            }
        }

        impl<T: GetTypeMeta + Reflect> GetTypeMeta for $ptr<T> {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    };
}

impl_reflect_pointer!(Box, |this| Some(&mut **this as &mut dyn Reflect));
impl_reflect_pointer!(Arc, |this| Arc::get_mut(this).map(|v| v as &mut dyn Reflect));

#[cfg(test)]
mod tests {
    use crate::ops::Pointer;
    use alloc::boxed::Box;
    use alloc::sync::Arc;

    #[test]
    fn shared_arc_is_not_writable() {
        let mut unique = Arc::new(1_u32);
        assert!(unique.pointee_mut().is_some());

        let _other = Arc::clone(&unique);
        assert!(unique.pointee_mut().is_none());
        assert_eq!(unique.pointee().downcast_ref::<u32>(), Some(&1));
    }

    #[test]
    fn box_is_writable() {
        let mut boxed = Box::new(2_i8);
        *boxed.pointee_mut().unwrap().downcast_mut::<i8>().unwrap() = -2;
        assert_eq!(*boxed, -2);
    }
}
