use alloc::vec::Vec;
use core::any::Any;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{List, ListIter, ReflectMut, ReflectRef};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }
}

impl<T: Reflect + Typed + Default> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|v| v as &mut dyn Reflect)
    }

    #[inline]
    fn iter(&self) -> ListIter<'_> {
        ListIter::new(self)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn resize_default(&mut self, len: usize) {
        let mut fresh = Vec::with_capacity(len);
        fresh.resize_with(len, T::default);
        *self = fresh;
    }

    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        <dyn Any>::downcast_ref::<Vec<u8>>(self).map(Vec::as_slice)
    }

    #[inline]
    fn as_bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        <dyn Any>::downcast_mut::<Vec<u8>>(self)
    }
}

impl<T: GetTypeMeta + Reflect + Default> GetTypeMeta for Vec<T> {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use crate::info::Typed;
    use crate::ops::List;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn byte_lists_expose_bytes() {
        let mut bytes: Vec<u8> = vec![1, 2, 3];
        assert_eq!(List::as_bytes(&bytes), Some(&[1_u8, 2, 3][..]));
        List::as_bytes_mut(&mut bytes).unwrap().push(4);
        assert_eq!(bytes.len(), 4);

        let words: Vec<u16> = vec![1];
        assert!(List::as_bytes(&words).is_none());
    }

    #[test]
    fn resize_default_is_exact() {
        let mut list: Vec<String> = Vec::with_capacity(64);
        list.push("a".into());
        list.resize_default(3);
        assert_eq!(list, vec![String::new(); 3]);
        assert!(list.capacity() < 64);
    }

    #[test]
    fn iter_in_order() {
        let list: Vec<i32> = vec![3, 1, 2];
        let items: Vec<i32> = List::iter(&list)
            .map(|v| *v.downcast_ref::<i32>().unwrap())
            .collect();
        assert_eq!(items, list);
        assert!(<Vec<Vec<u8>>>::type_info().as_list().unwrap().item_is::<Vec<u8>>());
    }
}
